pub mod mode;
pub mod scheme;

pub use mode::{Mode, Request};
pub use scheme::{SchemeLabel, UnknownScheme};
