use super::Lockable;

/// Primitive usable as the lock of a [`Vault`](crate::core::guarded::Vault).
///
/// A mutex is a fixed-identity resource: it is created unlocked by [`Default`] and is never moved
/// while locked, which the borrow held by every lock handle guarantees.
pub trait Mutex: Lockable + Default {}

impl<M: Lockable + Default> Mutex for M {}
