#![deny(unsafe_code)]

pub mod notices;
pub mod reference;
pub mod split;

pub use notices::write_notices;
pub use reference::convert_reference_matrix;
pub use split::{SplitResult, split_by_column};
