extern crate std;

use core::time::Duration;
use std::thread;

use super::ParkingRawMutex;
use crate::{
  core::{
    capability::{BasicLockable, CapabilityLevel, Classified, Lockable, TimedLockable},
    time::{TimeDomain, TimeDomainKind},
  },
  std::StdTimeDomain,
};

#[test]
fn try_lock_fails_while_held() {
  let mutex = ParkingRawMutex::new();
  mutex.lock();
  assert!(mutex.is_locked());
  assert!(!mutex.try_lock());
  unsafe { mutex.unlock() };
  assert!(mutex.try_lock());
  unsafe { mutex.unlock() };
}

#[test]
fn bounded_lock_gives_up_while_another_thread_holds_it() {
  let mutex = ParkingRawMutex::new();
  mutex.lock();
  thread::scope(|scope| {
    let attempt = scope.spawn(|| mutex.try_lock_for(Duration::from_millis(5)));
    assert!(!attempt.join().unwrap());
  });
  unsafe { mutex.unlock() };
  assert!(mutex.try_lock_until(StdTimeDomain::deadline_after(Duration::from_millis(5))));
  unsafe { mutex.unlock() };
}

#[test]
fn parking_mutex_is_basic_and_std_timed() {
  let caps = ParkingRawMutex::CAPABILITIES;
  assert_eq!(caps.level(), CapabilityLevel::Basic);
  assert_eq!(caps.time_domain(), Some(TimeDomainKind::StdMonotonic));
}
