//! Condition variables that cooperate with any [`BasicLockable`](crate::core::capability::BasicLockable).

mod condvar_like;
mod spin_condvar;
mod wait_status;

pub use condvar_like::CondvarLike;
pub use spin_condvar::SpinCondvar;
pub use wait_status::WaitStatus;
