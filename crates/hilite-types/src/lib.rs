pub mod context;
pub mod error;
pub mod highlight;
pub mod kind;
pub mod range;

pub use context::*;
pub use error::{Error, Result};
pub use highlight::*;
pub use kind::*;
pub use range::Range;
