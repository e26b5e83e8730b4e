pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;

pub use renderer::{RenderFrame, Renderer, RendererConfig};
pub use theme::Theme;
