use core::mem;

use crate::core::capability::{
  BasicLockable, Capabilities, Classified, GuardSend, Lockable, SharedLockable, classify_shared,
};


/// Reader/writer spin lock backed by [`spin::RwLock`], classified as shared and untimed.
#[derive(Default)]
pub struct SpinRawRwLock(spin::RwLock<()>);

impl SpinRawRwLock {
  /// Creates an unlocked reader/writer spin lock.
  #[must_use]
  pub const fn new() -> Self {
    Self(spin::RwLock::new(()))
  }

  /// Returns the number of shared holders.
  #[must_use]
  pub fn reader_count(&self) -> usize {
    self.0.reader_count()
  }

  /// Returns `true` while a writer holds the lock.
  #[must_use]
  pub fn is_write_locked(&self) -> bool {
    self.0.writer_count() > 0
  }
}

unsafe impl BasicLockable for SpinRawRwLock {
  type GuardMarker = GuardSend;

  fn lock(&self) {
    mem::forget(self.0.write());
  }

  unsafe fn unlock(&self) {
    unsafe { self.0.force_write_unlock() };
  }
}

impl Lockable for SpinRawRwLock {
  fn try_lock(&self) -> bool {
    self.0.try_write().map(mem::forget).is_some()
  }
}

impl SharedLockable for SpinRawRwLock {
  fn lock_shared(&self) {
    mem::forget(self.0.read());
  }

  fn try_lock_shared(&self) -> bool {
    self.0.try_read().map(mem::forget).is_some()
  }

  unsafe fn unlock_shared(&self) {
    unsafe { self.0.force_read_decrement() };
  }
}

impl Classified for SpinRawRwLock {
  const CAPABILITIES: Capabilities = classify_shared::<Self>();
}
