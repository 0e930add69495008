pub mod filter;
pub mod registry;

pub use filter::{prune, MARKDOWN_EXT};
pub use registry::{Files, SourceFile, SourcePath};
