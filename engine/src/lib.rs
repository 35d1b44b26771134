mod error;
pub mod pacing;
mod speedy2d;

pub use crate::error::EngineError;
pub use crate::speedy2d::start;
