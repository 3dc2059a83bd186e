use core::fmt;

use parking_lot::lock_api::{RawMutex as _, RawMutexTimed as _};

use super::StdTimeDomain;
use crate::core::capability::{
  BasicLockable, Capabilities, Classified, DomainDuration, DomainInstant, GuardSend, Lockable, TimedLockable,
  classify_timed,
};

#[cfg(test)]
mod tests;

/// Parking mutex backed by [`parking_lot::RawMutex`], classified as basic and timed in
/// [`StdTimeDomain`].
///
/// Built with `parking_lot`'s `send_guard` feature, so a lock taken on one thread may be released on
/// another and handles over it are `Send`.
pub struct ParkingRawMutex(parking_lot::RawMutex);

impl ParkingRawMutex {
  /// Creates an unlocked mutex.
  #[must_use]
  pub const fn new() -> Self {
    Self(parking_lot::RawMutex::INIT)
  }

  /// Returns `true` while some context holds the lock.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }
}

impl Default for ParkingRawMutex {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for ParkingRawMutex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ParkingRawMutex").field("locked", &self.is_locked()).finish()
  }
}

unsafe impl BasicLockable for ParkingRawMutex {
  type GuardMarker = GuardSend;

  fn lock(&self) {
    self.0.lock();
  }

  unsafe fn unlock(&self) {
    unsafe { self.0.unlock() };
  }
}

impl Lockable for ParkingRawMutex {
  fn try_lock(&self) -> bool {
    self.0.try_lock()
  }
}

impl TimedLockable for ParkingRawMutex {
  type Domain = StdTimeDomain;

  fn try_lock_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.0.try_lock_for(timeout)
  }

  fn try_lock_until(&self, deadline: DomainInstant<Self>) -> bool {
    self.0.try_lock_until(deadline)
  }
}

impl Classified for ParkingRawMutex {
  const CAPABILITIES: Capabilities = classify_timed::<Self>();
}
