pub mod objective;
pub mod truncation;

pub use objective::Objective;
pub use truncation::{select_highest, select_lowest, selection_size};
pub(crate) use truncation::kept_count;
