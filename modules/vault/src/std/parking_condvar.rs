use core::fmt;

use crate::core::{
  capability::BasicLockable,
  condvar::{CondvarLike, WaitStatus},
  time::TimeDomain,
};


/// Condition variable parking its waiters through `parking_lot`.
///
/// Waiters register under an internal epoch lock before releasing the caller's primitive, and
/// notifiers advance the epoch under the same lock, so a notification sent after the caller
/// released its primitive is never lost.
#[derive(Default)]
pub struct ParkingCondvar {
  epoch:   parking_lot::Mutex<u64>,
  condvar: parking_lot::Condvar,
}

impl ParkingCondvar {
  /// Creates a condition variable with no pending notifications.
  #[must_use]
  pub const fn new() -> Self {
    Self { epoch: parking_lot::const_mutex(0), condvar: parking_lot::Condvar::new() }
  }

  fn advance(&self) {
    let mut epoch = self.epoch.lock();
    *epoch = epoch.wrapping_add(1);
  }
}

impl CondvarLike for ParkingCondvar {
  unsafe fn wait<M: BasicLockable>(&self, mutex: &M) {
    let mut epoch = self.epoch.lock();
    let observed = *epoch;
    unsafe { mutex.unlock() };
    while *epoch == observed {
      self.condvar.wait(&mut epoch);
    }
    drop(epoch);
    mutex.lock();
  }

  unsafe fn wait_until<M: BasicLockable, D: TimeDomain>(&self, mutex: &M, deadline: &D::Instant) -> WaitStatus {
    let mut epoch = self.epoch.lock();
    let observed = *epoch;
    unsafe { mutex.unlock() };
    let status = loop {
      if *epoch != observed {
        break WaitStatus::Notified;
      }
      match D::remaining(deadline) {
        | Ok(remaining) if remaining.is_zero() => break WaitStatus::TimedOut,
        | Ok(remaining) => {
          self.condvar.wait_for(&mut epoch, remaining);
        },
        | Err(error) => {
          tracing::warn!(
            target: "synchro::condvar",
            %error,
            ?deadline,
            "deadline cannot be converted; wait reported as timed out"
          );
          break WaitStatus::TimedOut;
        },
      }
    };
    drop(epoch);
    mutex.lock();
    status
  }

  fn notify_one(&self) {
    self.advance();
    self.condvar.notify_one();
  }

  fn notify_all(&self) {
    self.advance();
    self.condvar.notify_all();
  }
}

impl fmt::Debug for ParkingCondvar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ParkingCondvar").finish_non_exhaustive()
  }
}
