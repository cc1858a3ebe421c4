//! Canvas rendering of a laid-out JSON tree with pan, zoom and focus.

mod component;
pub mod export;
mod render;
pub mod scale;
mod state;

pub use component::TreeGraphCanvas;
pub use state::FocusRequest;
