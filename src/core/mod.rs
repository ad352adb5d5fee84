pub mod promises;

pub use crate::domain::ports::LogSink;
pub use crate::utils::error::Result;
