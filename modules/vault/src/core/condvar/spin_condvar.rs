use core::hint;

use portable_atomic::{AtomicUsize, Ordering};

use super::{CondvarLike, WaitStatus};
use crate::core::{capability::BasicLockable, time::TimeDomain};


/// Busy-waiting condition variable for `no_std` targets.
///
/// Waiters spin on a notification epoch. [`notify_one`](CondvarLike::notify_one) advances the
/// epoch like [`notify_all`](CondvarLike::notify_all), so every waiter wakes; the extra wakeups are
/// indistinguishable from spurious ones.
#[derive(Debug, Default)]
pub struct SpinCondvar {
  epoch: AtomicUsize,
}

impl SpinCondvar {
  /// Creates a condition variable with no pending notifications.
  #[must_use]
  pub const fn new() -> Self {
    Self { epoch: AtomicUsize::new(0) }
  }

  fn advance(&self) {
    self.epoch.fetch_add(1, Ordering::Release);
  }
}

impl CondvarLike for SpinCondvar {
  unsafe fn wait<M: BasicLockable>(&self, mutex: &M) {
    let observed = self.epoch.load(Ordering::Acquire);
    unsafe { mutex.unlock() };
    while self.epoch.load(Ordering::Acquire) == observed {
      hint::spin_loop();
    }
    mutex.lock();
  }

  unsafe fn wait_until<M: BasicLockable, D: TimeDomain>(&self, mutex: &M, deadline: &D::Instant) -> WaitStatus {
    let observed = self.epoch.load(Ordering::Acquire);
    unsafe { mutex.unlock() };
    let status = loop {
      if self.epoch.load(Ordering::Acquire) != observed {
        break WaitStatus::Notified;
      }
      if D::has_elapsed(deadline) {
        break WaitStatus::TimedOut;
      }
      hint::spin_loop();
    };
    mutex.lock();
    status
  }

  fn notify_one(&self) {
    self.advance();
  }

  fn notify_all(&self) {
    self.advance();
  }
}
