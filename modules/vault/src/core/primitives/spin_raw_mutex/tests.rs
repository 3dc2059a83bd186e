use super::SpinRawMutex;
use crate::core::capability::{BasicLockable, CapabilityLevel, Classified, Lockable};

#[test]
fn lock_excludes_try_lock_until_unlocked() {
  let mutex = SpinRawMutex::new();
  mutex.lock();
  assert!(mutex.is_locked());
  assert!(!mutex.try_lock());
  unsafe { mutex.unlock() };
  assert!(!mutex.is_locked());
  assert!(mutex.try_lock());
  unsafe { mutex.unlock() };
}

#[test]
fn spin_mutex_is_basic_and_untimed() {
  let caps = SpinRawMutex::CAPABILITIES;
  assert_eq!(caps.level(), CapabilityLevel::Basic);
  assert!(!caps.is_timed());
  assert!(!caps.supports_shared());
}
