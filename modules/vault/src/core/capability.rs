//! Capability classification of mutual-exclusion primitives.
//!
//! The traits form an additive ladder: [`BasicLockable`] ⊂ [`Lockable`] ⊂ [`SharedLockable`] ⊂
//! [`UpgradeLockable`], with [`TimedLockable`], [`SharedTimedLockable`] and
//! [`UpgradeTimedLockable`] adding bounded waits in a single [`TimeDomain`](crate::core::time::TimeDomain).
//! A primitive adapter implements the traits it supports and declares its [`Capabilities`] through
//! one of the `classify_*` functions, whose trait bounds check the declaration at compile time.

mod basic_lockable;
mod capabilities;
mod capability_level;
mod classified;
mod classify;
mod guard_marker;
mod lockable;
mod mutex;
mod shared_lockable;
mod shared_timed_lockable;
mod timed_lockable;
mod upgrade_lockable;
mod upgrade_timed_lockable;


pub use basic_lockable::BasicLockable;
pub use capabilities::Capabilities;
pub use capability_level::CapabilityLevel;
pub use classified::Classified;
pub use classify::{
  classify_basic, classify_shared, classify_shared_timed, classify_timed, classify_upgrade, classify_upgrade_timed,
};
pub use guard_marker::{GuardNoSend, GuardSend};
pub use lockable::Lockable;
pub use mutex::Mutex;
pub use shared_lockable::SharedLockable;
pub use shared_timed_lockable::SharedTimedLockable;
pub use timed_lockable::{DomainDuration, DomainInstant, TimedLockable};
pub use upgrade_lockable::UpgradeLockable;
pub use upgrade_timed_lockable::UpgradeTimedLockable;
