use core::time::Duration;

use super::ParkingRawRwLock;
use crate::core::{
  capability::{
    BasicLockable, CapabilityLevel, Classified, Lockable, SharedLockable, SharedTimedLockable, UpgradeLockable,
    UpgradeTimedLockable,
  },
  time::TimeDomainKind,
};

#[test]
fn readers_share_and_exclude_writers() {
  let lock = ParkingRawRwLock::new();
  lock.lock_shared();
  assert!(lock.try_lock_shared());
  assert!(!lock.try_lock());
  unsafe {
    lock.unlock_shared();
    lock.unlock_shared();
  }
  assert!(!lock.is_locked());
}

#[test]
fn upgrade_coexists_with_readers_but_not_with_another_upgrade() {
  let lock = ParkingRawRwLock::new();
  lock.lock_upgrade();
  assert!(lock.try_lock_shared());
  assert!(!lock.try_lock_upgrade());
  assert!(!lock.try_lock_upgrade_for(Duration::from_millis(2)));
  unsafe { lock.unlock_shared() };

  unsafe { lock.unlock_upgrade_and_lock() };
  assert!(lock.is_locked_exclusive());
  assert!(!lock.try_lock_shared_for(Duration::from_millis(2)));

  unsafe { lock.unlock_and_lock_upgrade() };
  assert!(!lock.is_locked_exclusive());
  unsafe { lock.unlock_upgrade_and_lock_shared() };
  assert!(lock.try_lock_upgrade());
  unsafe {
    lock.unlock_upgrade();
    lock.unlock_shared();
  }
  assert!(!lock.is_locked());
}

#[test]
fn bounded_upgrade_waits_out_readers() {
  let lock = ParkingRawRwLock::new();
  lock.lock_upgrade();
  lock.lock_shared();
  assert!(!unsafe { lock.try_unlock_upgrade_and_lock_for(Duration::from_millis(5)) });
  unsafe { lock.unlock_shared() };
  assert!(unsafe { lock.try_unlock_upgrade_and_lock_for(Duration::from_millis(5)) });
  unsafe { lock.unlock_and_lock_shared() };
  assert!(!lock.is_locked_exclusive());
  unsafe { lock.unlock_shared() };
}

#[test]
fn parking_rw_lock_is_upgrade_and_std_timed() {
  let caps = ParkingRawRwLock::CAPABILITIES;
  assert_eq!(caps.level(), CapabilityLevel::Upgrade);
  assert!(caps.supports_shared());
  assert!(caps.supports_upgrade());
  assert_eq!(caps.time_domain(), Some(TimeDomainKind::StdMonotonic));
}
