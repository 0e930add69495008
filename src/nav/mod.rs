pub mod collector;
pub mod spec;

pub use collector::{collect_pages, ValidPages};
pub use spec::NavNode;
