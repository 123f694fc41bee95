mod json_lines;
mod pipeline;

pub use json_lines::{JsonLinesSource, SourceStats};
pub use pipeline::{IngestionPipeline, IngestionSender};
