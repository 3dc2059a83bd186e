/// Locking operations a primitive offers, ordered from coarsest to richest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityLevel {
  /// Exclusive lock, unlock and try-lock.
  Basic,
  /// Adds shared (reader) locking.
  Shared,
  /// Adds the upgradable state and its transitions.
  Upgrade,
}
