mod component;
mod error;
mod render;
mod state;

pub use component::MindMapCanvas;
