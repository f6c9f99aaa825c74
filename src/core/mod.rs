pub mod grouping;
pub mod map;
pub mod marker_set;

pub use crate::domain::model::{MapOptions, OptionValue};
pub use crate::domain::ports::MapMarker;
pub use crate::utils::error::Result;
