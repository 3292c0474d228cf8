pub mod config;
pub mod extractor;
pub mod loader;
pub mod output;
pub mod pipeline;
