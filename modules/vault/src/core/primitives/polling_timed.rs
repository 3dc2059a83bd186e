use core::{fmt, hint, marker::PhantomData};

use super::{SpinRawMutex, SpinRawRwLock};
use crate::core::{
  capability::{
    BasicLockable, Capabilities, Classified, DomainDuration, DomainInstant, Lockable, SharedLockable,
    SharedTimedLockable, TimedLockable, classify_shared_timed, classify_timed,
  },
  time::TimeDomain,
};


/// Adds bounded acquisition in the domain `D` to an untimed primitive by polling its `try_*`
/// operations until the deadline passes.
///
/// Suited to spin primitives, which never park the thread anyway.
pub struct PollingTimed<M, D> {
  inner:   M,
  _domain: PhantomData<fn() -> D>,
}

impl<M, D> PollingTimed<M, D> {
  /// Wraps `inner`.
  #[must_use]
  pub const fn new(inner: M) -> Self {
    Self { inner, _domain: PhantomData }
  }

  /// Returns the wrapped primitive.
  #[must_use]
  pub const fn inner(&self) -> &M {
    &self.inner
  }
}

impl<M, D: TimeDomain> PollingTimed<M, D> {
  fn poll_until(deadline: &D::Instant, mut attempt: impl FnMut() -> bool) -> bool {
    loop {
      if attempt() {
        return true;
      }
      if D::has_elapsed(deadline) {
        return false;
      }
      hint::spin_loop();
    }
  }
}

impl<M: Default, D> Default for PollingTimed<M, D> {
  fn default() -> Self {
    Self::new(M::default())
  }
}

impl<M, D> fmt::Debug for PollingTimed<M, D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PollingTimed").finish_non_exhaustive()
  }
}

unsafe impl<M: BasicLockable, D> BasicLockable for PollingTimed<M, D> {
  type GuardMarker = M::GuardMarker;

  fn lock(&self) {
    self.inner.lock();
  }

  unsafe fn unlock(&self) {
    unsafe { self.inner.unlock() };
  }
}

impl<M: Lockable, D> Lockable for PollingTimed<M, D> {
  fn try_lock(&self) -> bool {
    self.inner.try_lock()
  }
}

impl<M: Lockable, D: TimeDomain> TimedLockable for PollingTimed<M, D> {
  type Domain = D;

  fn try_lock_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.try_lock_until(D::deadline_after(timeout))
  }

  fn try_lock_until(&self, deadline: DomainInstant<Self>) -> bool {
    Self::poll_until(&deadline, || self.inner.try_lock())
  }
}

impl<M: SharedLockable, D> SharedLockable for PollingTimed<M, D> {
  fn lock_shared(&self) {
    self.inner.lock_shared();
  }

  fn try_lock_shared(&self) -> bool {
    self.inner.try_lock_shared()
  }

  unsafe fn unlock_shared(&self) {
    unsafe { self.inner.unlock_shared() };
  }
}

impl<M: SharedLockable, D: TimeDomain> SharedTimedLockable for PollingTimed<M, D> {
  fn try_lock_shared_for(&self, timeout: DomainDuration<Self>) -> bool {
    self.try_lock_shared_until(D::deadline_after(timeout))
  }

  fn try_lock_shared_until(&self, deadline: DomainInstant<Self>) -> bool {
    Self::poll_until(&deadline, || self.inner.try_lock_shared())
  }
}

impl<D: TimeDomain> Classified for PollingTimed<SpinRawMutex, D> {
  const CAPABILITIES: Capabilities = classify_timed::<Self>();
}

impl<D: TimeDomain> Classified for PollingTimed<SpinRawRwLock, D> {
  const CAPABILITIES: Capabilities = classify_shared_timed::<Self>();
}
