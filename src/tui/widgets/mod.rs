mod audio_player;
mod doodle;
mod intro;
mod matching;
mod profile;

pub use intro::IntroScreen;
pub use matching::MatchingScreen;
pub use profile::ProfileScreen;

const PLAY_ICON: &str = "󰐊";
const PAUSE_ICON: &str = "󰏤";
