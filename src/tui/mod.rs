mod layout;
mod renderer;
mod widgets;

pub use renderer::render;
