/*!
# Service Queue

A waiting line of integer buzzer tokens with O(1) issue, seat, evict
and promote operations.

Customers take a numbered buzzer when they join the line and hand it
back when they leave. Buzzer ids are recycled: once a token leaves the
line its id becomes available to the next customer. Internally a single
growable token table backs two intrusive linked lists (the active line
and a free stack of reusable ids), so every operation short of display
runs in constant time.

## Architecture

- **ServiceQueue**: the line itself (issue, seat, evict, promote)
- **QueueManager**: registry of independent named queues
- **log**: pluggable logging (colored console output by default)

Tokens are plain `u32` values. They are only meaningful within the
queue that issued them.
*/

// Internal modules
mod error;
pub mod log;
pub mod queue;

// Main svq namespace module
pub mod svq {
    // Error types
    pub use crate::error::{Error, Result};

    // Queue types
    pub use crate::queue::{QueueManager, ServiceQueue, INITIAL_CAPACITY};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: queue_* macros are NOT re-exported here - they are internal only
    }
}
