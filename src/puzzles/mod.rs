//! Small, independent algorithm puzzles.

pub mod braces;
pub mod compass;
pub mod dominoes;
pub mod ranges;
pub mod zigzag;

pub use braces::{expand, try_expand};
pub use compass::compass_points;
pub use dominoes::can_make_row;
pub use ranges::extract_ranges;
pub use zigzag::zigzag_matrix;
