//! Sugar over lists, iterators and maps

pub mod average;
pub mod iter;
pub mod list;
pub mod map;

pub use average::Average;
pub use iter::IterExt;
pub use list::{ContainedIn, ListExt};
pub use map::MapExt;
