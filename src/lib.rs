pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{MemorySink, TracingSink};
pub use crate::core::promises::{
    pause_for, pause_for_ms, rejected_wrapper, resolved_wrapper, PromiseHandler,
};
pub use crate::domain::ports::LogSink;
pub use crate::utils::error::{Result, ValueError};
