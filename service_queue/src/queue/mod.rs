//! Service queue module
//!
//! Provides the waiting line itself plus a registry of named queues.
//! Tokens are opaque `u32` buzzer ids, recycled after their holder
//! leaves the line.

mod queue_manager;
mod service_queue;
mod slot;

pub use queue_manager::QueueManager;
pub use service_queue::{ServiceQueue, INITIAL_CAPACITY};
