use serde::Deserialize;

#[derive(Deserialize)]
pub struct ThemeImport {
    pub colors: ColorScheme,
}

#[derive(Deserialize)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    pub text_secondary: String,
    pub accent: String,
    pub border: String,
    pub tag: String,
    pub doodle_blue: String,
    pub doodle_green: String,
    pub listening_bg: String,
    pub listening_accent: String,
}
