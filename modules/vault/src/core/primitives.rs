//! Primitive adapters available without std.

mod polling_timed;
mod spin_raw_mutex;
mod spin_raw_rw_lock;

pub use polling_timed::PollingTimed;
pub use spin_raw_mutex::SpinRawMutex;
pub use spin_raw_rw_lock::SpinRawRwLock;
