extern crate std;

use core::{
  mem,
  sync::atomic::{AtomicU64, Ordering},
};
use std::{thread, vec, vec::Vec};

use super::LockHandle;
use crate::core::{
  capability::BasicLockable,
  condvar::{CondvarLike, SpinCondvar, WaitStatus},
  guarded::{LockState, Notification, Vault},
  primitives::{PollingTimed, SpinRawMutex, SpinRawRwLock},
  time::{Ratio, TickClock, TickDomain, TickDuration, TimeDomain},
};

static TICKS: AtomicU64 = AtomicU64::new(0);

struct SteppingClock;

impl TickClock for SteppingClock {
  const RESOLUTION: Ratio = Ratio::MICRO;

  fn now_ticks() -> u64 {
    TICKS.fetch_add(1, Ordering::SeqCst)
  }
}

type TimedSpin = PollingTimed<SpinRawMutex, TickDomain<SteppingClock>>;
type TimedSpinRw = PollingTimed<SpinRawRwLock, TickDomain<SteppingClock>>;

/// Condition variable counting the notifications it receives.
#[derive(Default)]
struct CountingCondvar {
  inner: SpinCondvar,
  one:   AtomicU64,
  all:   AtomicU64,
}

impl CondvarLike for CountingCondvar {
  unsafe fn wait<M: BasicLockable>(&self, mutex: &M) {
    unsafe { self.inner.wait(mutex) };
  }

  unsafe fn wait_until<M: BasicLockable, D: TimeDomain>(&self, mutex: &M, deadline: &D::Instant) -> WaitStatus {
    unsafe { self.inner.wait_until::<M, D>(mutex, deadline) }
  }

  fn notify_one(&self) {
    self.one.fetch_add(1, Ordering::SeqCst);
    self.inner.notify_one();
  }

  fn notify_all(&self) {
    self.all.fetch_add(1, Ordering::SeqCst);
    self.inner.notify_all();
  }
}

#[test]
fn default_handle_holds_nothing() {
  let handle = LockHandle::<u32, SpinRawMutex, SpinCondvar>::default();
  assert_eq!(handle.state(), LockState::None);
  assert!(!handle.is_locked());
  assert_eq!(handle.notification(), Notification::None);
}

#[test]
fn unlock_then_lock_restores_the_same_lock() {
  let vault = Vault::<u32, SpinRawMutex, SpinCondvar>::new(3);
  let mut handle = vault.lock();
  let token = handle.unlock();
  assert_eq!(handle.state(), LockState::None);
  assert_eq!(token.state(), LockState::Exclusive);
  assert!(token.is_for(&vault));
  assert!(vault.try_lock().is_some());

  handle.lock(token);
  assert_eq!(handle.state(), LockState::Exclusive);
  assert!(handle.is_bound_to(&vault));
  assert!(vault.try_lock().is_none());
  *handle += 1;
  drop(handle);
  assert_eq!(vault.copy_value(), 4);
}

#[test]
fn scoped_unlock_releases_for_its_scope() {
  let vault = Vault::<u32, SpinRawMutex, SpinCondvar>::new(0);
  let mut handle = vault.lock();
  {
    let window = handle.scoped_unlock();
    assert_eq!(window.handle().state(), LockState::None);
    assert_eq!(window.restores(), LockState::Exclusive);
    vault.assign_value(9);
  }
  assert_eq!(handle.state(), LockState::Exclusive);
  assert_eq!(*handle, 9);
}

#[test]
fn take_moves_the_lock_and_leaves_none() {
  let vault = Vault::<u32, SpinRawMutex, SpinCondvar>::new(5);
  let mut source = vault.lock();
  let moved = mem::take(&mut source);
  assert_eq!(source.state(), LockState::None);
  assert_eq!(moved.state(), LockState::Exclusive);
  assert!(moved.is_bound_to(&vault));
  drop(source);
  assert!(vault.try_lock().is_none());
  drop(moved);
  assert!(vault.try_lock().is_some());
}

#[test]
fn notification_is_sent_once_after_release() {
  let vault = Vault::<u32, SpinRawMutex, CountingCondvar>::new(0);
  let mut handle = vault.lock();
  handle.set_notification(Notification::All);
  drop(handle);
  let mut handle = vault.lock();
  handle.set_notification(Notification::One);
  drop(handle);
  drop(vault.lock());

  let condvar = &vault.block().condvar;
  assert_eq!(condvar.all.load(Ordering::SeqCst), 1);
  assert_eq!(condvar.one.load(Ordering::SeqCst), 1);
}

#[test]
fn unbound_handle_notifies_nothing() {
  let vault = Vault::<u32, SpinRawMutex, CountingCondvar>::new(0);
  let mut handle = vault.lock();
  handle.set_notification(Notification::All);
  let token = handle.unlock();
  drop(handle);
  drop(token);
  assert_eq!(vault.block().condvar.all.load(Ordering::SeqCst), 0);
}

#[test]
fn wait_pred_sees_update_from_another_thread() {
  let vault = Vault::<Vec<u32>, SpinRawMutex, SpinCondvar>::new(Vec::new());
  thread::scope(|scope| {
    let mut handle = vault.lock();
    scope.spawn(|| {
      let mut producer = vault.lock();
      producer.push(1);
      producer.set_notification(Notification::All);
    });
    handle.wait_pred(|items| !items.is_empty());
    assert_eq!(handle.state(), LockState::Exclusive);
    assert_eq!(*handle, vec![1]);
  });
}

#[test]
fn wait_for_pred_times_out_with_lock_held() {
  let vault = Vault::<bool, TimedSpin, SpinCondvar>::new(false);
  let mut handle = vault.lock();
  assert!(!handle.wait_for_pred(TickDuration::from_ticks(200), |ready| *ready));
  assert_eq!(handle.state(), LockState::Exclusive);
  assert!(vault.try_lock().is_none());
}

#[test]
fn wait_for_pred_returns_immediately_when_ready() {
  let vault = Vault::<bool, TimedSpin, SpinCondvar>::new(true);
  let mut handle = vault.lock();
  assert!(handle.wait_for_pred(TickDuration::ZERO, |ready| *ready));
}

#[test]
#[should_panic(expected = "holds no lock")]
fn value_of_unbound_handle_panics() {
  let handle = LockHandle::<u32, SpinRawMutex, SpinCondvar>::default();
  let _ = handle.value();
}

#[test]
#[should_panic(expected = "holds no lock")]
fn unlock_of_unbound_handle_panics() {
  let mut handle = LockHandle::<u32, SpinRawMutex, SpinCondvar>::default();
  let _token = handle.unlock();
}

#[test]
#[should_panic(expected = "already holds")]
fn locking_a_locked_handle_panics() {
  let first = Vault::<u32, SpinRawMutex, SpinCondvar>::new(0);
  let second = Vault::<u32, SpinRawMutex, SpinCondvar>::new(0);
  let mut handle = first.lock();
  let mut other = second.lock();
  let token = other.unlock();
  handle.lock(token);
}

#[test]
#[should_panic(expected = "Exclusive is required")]
fn mutating_through_shared_handle_panics() {
  let vault = Vault::<u32, SpinRawRwLock, SpinCondvar>::new(0);
  let mut handle = vault.lock_shared();
  *handle.value_mut() = 1;
}

#[test]
#[should_panic(expected = "holds no lock")]
fn scoped_unlock_of_unbound_handle_panics() {
  let mut handle = LockHandle::<u32, SpinRawMutex, SpinCondvar>::default();
  let _window = handle.scoped_unlock();
}

#[test]
#[should_panic(expected = "Exclusive is required")]
fn waiting_on_shared_handle_panics() {
  let vault = Vault::<u32, SpinRawRwLock, SpinCondvar>::new(0);
  let mut handle = vault.lock_shared();
  handle.wait();
}

#[test]
#[should_panic(expected = "Exclusive is required")]
fn bounded_wait_on_shared_handle_panics() {
  let vault = Vault::<u32, TimedSpinRw, SpinCondvar>::new(0);
  let mut handle = vault.lock_shared();
  let _ = handle.wait_for(TickDuration::from_ticks(10));
}

#[test]
fn scoped_unlock_restores_shared_lock() {
  let vault = Vault::<u32, SpinRawRwLock, SpinCondvar>::new(1);
  let mut handle = vault.lock_shared();
  {
    let window = handle.scoped_unlock();
    assert_eq!(window.handle().state(), LockState::None);
    assert_eq!(window.restores(), LockState::Shared);
    vault.assign_value(2);
  }
  assert_eq!(handle.state(), LockState::Shared);
  assert_eq!(*handle, 2);
  assert!(vault.try_lock().is_none());
  assert!(vault.try_lock_shared().is_some());
}

#[cfg(feature = "std")]
mod upgradable {
  use core::time::Duration;

  use crate::{
    core::guarded::LockState,
    std::{StdRwVault, StdVault},
  };

  #[test]
  #[should_panic(expected = "Exclusive is required")]
  fn bounded_wait_on_upgrade_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_upgrade();
    let _ = handle.wait_for(Duration::from_millis(1));
  }

  #[test]
  #[should_panic(expected = "Exclusive is required")]
  fn waiting_on_upgrade_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_upgrade();
    handle.wait();
  }

  #[test]
  #[should_panic(expected = "Upgrade is required")]
  fn upgrading_an_exclusive_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock();
    handle.upgrade();
  }

  #[test]
  #[should_panic(expected = "Upgrade is required")]
  fn upgrading_a_shared_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_shared();
    handle.upgrade();
  }

  #[test]
  #[should_panic(expected = "Exclusive is required")]
  fn downgrading_a_shared_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_shared();
    handle.downgrade();
  }

  #[test]
  #[should_panic(expected = "Exclusive is required")]
  fn downgrading_an_upgrade_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_upgrade();
    handle.downgrade();
  }

  #[test]
  #[should_panic(expected = "holds no lock")]
  fn upgrading_an_unbound_handle_panics() {
    let vault = StdRwVault::new(0_u32);
    let mut handle = vault.lock_upgrade();
    let _token = handle.unlock();
    handle.upgrade();
  }

  #[test]
  fn scoped_unlock_restores_upgrade_lock() {
    let vault = StdRwVault::new(1_u32);
    let mut handle = vault.lock_upgrade();
    {
      let window = handle.scoped_unlock();
      assert_eq!(window.handle().state(), LockState::None);
      assert_eq!(window.restores(), LockState::Upgrade);
      assert!(vault.try_lock_upgrade().is_some());
      vault.assign_value(2);
    }
    assert_eq!(handle.state(), LockState::Upgrade);
    assert_eq!(*handle, 2);
    assert!(vault.try_lock_upgrade().is_none());
    assert!(vault.try_lock().is_none());
    assert!(vault.try_lock_shared().is_some());
    handle.upgrade();
    assert_eq!(handle.state(), LockState::Exclusive);
  }

  #[test]
  fn scoped_unlock_restores_timed_exclusive_lock() {
    let vault = StdVault::new(1_u32);
    let mut handle = vault.lock();
    {
      let _window = handle.scoped_unlock();
      assert!(vault.try_lock_for(Duration::from_millis(1)).is_some());
    }
    assert_eq!(handle.state(), LockState::Exclusive);
    assert!(vault.try_lock_for(Duration::from_millis(1)).is_none());
  }
}
