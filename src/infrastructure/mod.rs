pub mod exposition;

// Re-export the renderer for easy access
pub use exposition::render;
