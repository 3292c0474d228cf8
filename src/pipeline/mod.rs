pub mod errors;
pub mod manual;
pub mod post;

pub use errors::{ConvertError, IndexError};
pub use manual::{IndexSummary, build_search_index, write_search_index};
pub use post::{ConvertedPost, convert_post};
