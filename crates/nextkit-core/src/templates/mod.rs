pub mod catalog;
pub mod fallback;
pub mod kind;
pub mod registry;

pub use fallback::*;
pub use kind::*;
pub use registry::*;
