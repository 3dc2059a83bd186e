use super::{
  Capabilities, CapabilityLevel, Lockable, SharedLockable, SharedTimedLockable, TimedLockable, UpgradeLockable,
  UpgradeTimedLockable,
};
use crate::core::time::TimeDomain;

/// Classifies an untimed exclusive-only primitive.
#[must_use]
pub const fn classify_basic<M: Lockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Basic, None)
}

/// Classifies an exclusive-only primitive with bounded waits.
#[must_use]
pub const fn classify_timed<M: TimedLockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Basic, Some(<M::Domain as TimeDomain>::KIND))
}

/// Classifies an untimed reader/writer primitive.
#[must_use]
pub const fn classify_shared<M: SharedLockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Shared, None)
}

/// Classifies a reader/writer primitive with bounded shared and exclusive waits.
#[must_use]
pub const fn classify_shared_timed<M: SharedTimedLockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Shared, Some(<M::Domain as TimeDomain>::KIND))
}

/// Classifies an untimed upgradable primitive.
#[must_use]
pub const fn classify_upgrade<M: UpgradeLockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Upgrade, None)
}

/// Classifies an upgradable primitive with bounded waits at every level.
#[must_use]
pub const fn classify_upgrade_timed<M: UpgradeTimedLockable>() -> Capabilities {
  Capabilities::new(CapabilityLevel::Upgrade, Some(<M::Domain as TimeDomain>::KIND))
}
