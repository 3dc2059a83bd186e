use core::fmt;

use parking_lot::lock_api::{
  RawRwLock as _, RawRwLockDowngrade as _, RawRwLockTimed as _, RawRwLockUpgrade as _,
  RawRwLockUpgradeDowngrade as _, RawRwLockUpgradeTimed as _,
};

use super::StdTimeDomain;
use crate::core::capability::{
  BasicLockable, Capabilities, Classified, DomainDuration, DomainInstant, GuardSend, Lockable, SharedLockable,
  SharedTimedLockable, TimedLockable, UpgradeLockable, UpgradeTimedLockable, classify_upgrade_timed,
};

#[cfg(test)]
mod tests;

/// Reader/writer lock backed by [`parking_lot::RawRwLock`], classified as upgradable and timed in
/// [`StdTimeDomain`].
///
/// Every transition between exclusive, upgrade and shared is atomic: no writer can slip in
/// between the release of one state and the acquisition of the next. Handles over it are `Send`
/// for the same reason as [`ParkingRawMutex`](super::ParkingRawMutex)'s.
pub struct ParkingRawRwLock(parking_lot::RawRwLock);

impl ParkingRawRwLock {
  /// Creates an unlocked reader/writer lock.
  #[must_use]
  pub const fn new() -> Self {
    Self(parking_lot::RawRwLock::INIT)
  }

  /// Returns `true` while any context holds the lock in any state.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }

  /// Returns `true` while a writer holds the lock.
  #[must_use]
  pub fn is_locked_exclusive(&self) -> bool {
    self.0.is_locked_exclusive()
  }
}

impl Default for ParkingRawRwLock {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for ParkingRawRwLock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ParkingRawRwLock")
      .field("locked", &self.is_locked())
      .field("exclusive", &self.is_locked_exclusive())
      .finish()
  }
}

unsafe impl BasicLockable for ParkingRawRwLock {
  type GuardMarker = GuardSend;

  fn lock(&self) {
    self.0.lock_exclusive();
  }

  unsafe fn unlock(&self) {
    unsafe { self.0.unlock_exclusive() };
  }
}

impl Lockable for ParkingRawRwLock {
  fn try_lock(&self) -> bool {
    self.0.try_lock_exclusive()
  }
}

impl TimedLockable for ParkingRawRwLock {
  type Domain = StdTimeDomain;

  fn try_lock_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.0.try_lock_exclusive_for(timeout)
  }

  fn try_lock_until(&self, deadline: DomainInstant<Self>) -> bool {
    self.0.try_lock_exclusive_until(deadline)
  }
}

impl SharedLockable for ParkingRawRwLock {
  fn lock_shared(&self) {
    self.0.lock_shared();
  }

  fn try_lock_shared(&self) -> bool {
    self.0.try_lock_shared()
  }

  unsafe fn unlock_shared(&self) {
    unsafe { self.0.unlock_shared() };
  }
}

impl SharedTimedLockable for ParkingRawRwLock {
  fn try_lock_shared_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.0.try_lock_shared_for(timeout)
  }

  fn try_lock_shared_until(&self, deadline: DomainInstant<Self>) -> bool {
    self.0.try_lock_shared_until(deadline)
  }
}

impl UpgradeLockable for ParkingRawRwLock {
  fn lock_upgrade(&self) {
    self.0.lock_upgradable();
  }

  fn try_lock_upgrade(&self) -> bool {
    self.0.try_lock_upgradable()
  }

  unsafe fn unlock_upgrade(&self) {
    unsafe { self.0.unlock_upgradable() };
  }

  unsafe fn unlock_and_lock_shared(&self) {
    unsafe { self.0.downgrade() };
  }

  unsafe fn unlock_and_lock_upgrade(&self) {
    unsafe { self.0.downgrade_to_upgradable() };
  }

  unsafe fn unlock_upgrade_and_lock(&self) {
    unsafe { self.0.upgrade() };
  }

  unsafe fn unlock_upgrade_and_lock_shared(&self) {
    unsafe { self.0.downgrade_upgradable() };
  }
}

impl UpgradeTimedLockable for ParkingRawRwLock {
  fn try_lock_upgrade_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.0.try_lock_upgradable_for(timeout)
  }

  fn try_lock_upgrade_until(&self, deadline: DomainInstant<Self>) -> bool {
    self.0.try_lock_upgradable_until(deadline)
  }

  unsafe fn try_unlock_upgrade_and_lock_for(&self, timeout: DomainDuration<Self>) -> bool {
    unsafe { self.0.try_upgrade_for(timeout) }
  }

  unsafe fn try_unlock_upgrade_and_lock_until(&self, deadline: DomainInstant<Self>) -> bool {
    unsafe { self.0.try_upgrade_until(deadline) }
  }
}

impl Classified for ParkingRawRwLock {
  const CAPABILITIES: Capabilities = classify_upgrade_timed::<Self>();
}
