/// Capability traits classifying mutual-exclusion primitives.
pub mod capability;
/// Condition variables usable with any classified primitive.
pub mod condvar;
/// Control block, lock handle, scoped unlock and vault.
pub mod guarded;
/// `no_std` primitive adapters.
pub mod primitives;
/// Duration and time-point contracts and the time domains built on them.
pub mod time;
/// Toolbox abstraction selecting primitive and condition-variable families.
pub mod toolbox;
