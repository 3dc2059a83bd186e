use core::mem;

use crate::core::capability::{BasicLockable, Capabilities, Classified, GuardSend, Lockable, classify_basic};

#[cfg(test)]
mod tests;

/// Exclusive spin lock backed by [`spin::Mutex`], classified as basic and untimed.
#[derive(Default)]
pub struct SpinRawMutex(spin::Mutex<()>);

impl SpinRawMutex {
  /// Creates an unlocked spin mutex.
  #[must_use]
  pub const fn new() -> Self {
    Self(spin::Mutex::new(()))
  }

  /// Returns `true` while some context holds the lock.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }
}

unsafe impl BasicLockable for SpinRawMutex {
  type GuardMarker = GuardSend;

  fn lock(&self) {
    mem::forget(self.0.lock());
  }

  unsafe fn unlock(&self) {
    unsafe { self.0.force_unlock() };
  }
}

impl Lockable for SpinRawMutex {
  fn try_lock(&self) -> bool {
    self.0.try_lock().map(mem::forget).is_some()
  }
}

impl Classified for SpinRawMutex {
  const CAPABILITIES: Capabilities = classify_basic::<Self>();
}
