pub mod content;
pub mod filter;
pub mod model;
pub mod util;

pub use content::{ContentLookup, DirectoryContent, MemoryContent};
pub use filter::{FilterOutput, MarkupFilter};
pub use model::{AssignedLabel, FilterStats, LabelKind, LabelMapping};
