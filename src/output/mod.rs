pub mod frontmatter;
pub mod index;
pub mod writer;

pub use frontmatter::PostDocument;
pub use index::{PageRecord, SearchIndex};
pub use writer::write_atomic;
