use core::{cmp::Ordering, fmt, marker::PhantomData};

use super::{ClockInstant, TickClock, TickDuration};

/// Point on the timeline of the clock `C`, counted in ticks since the clock's epoch.
pub struct TickInstant<C> {
  ticks:  u64,
  _clock: PhantomData<fn() -> C>,
}

impl<C> TickInstant<C> {
  /// Creates an instant `ticks` ticks after the epoch.
  #[must_use]
  pub const fn from_ticks(ticks: u64) -> Self {
    Self { ticks, _clock: PhantomData }
  }

  /// Returns the tick count since the epoch.
  #[must_use]
  pub const fn ticks(&self) -> u64 {
    self.ticks
  }

  /// Moves the instant forward by `duration`, saturating at the end of the timeline.
  #[must_use]
  pub const fn saturating_add(self, duration: TickDuration<C>) -> Self {
    Self::from_ticks(self.ticks.saturating_add(duration.ticks()))
  }

  /// Returns the distance from `earlier` to this instant, or zero when `earlier` is later.
  #[must_use]
  pub const fn saturating_duration_since(&self, earlier: Self) -> TickDuration<C> {
    TickDuration::from_ticks(self.ticks.saturating_sub(earlier.ticks))
  }
}

impl<C> Clone for TickInstant<C> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<C> Copy for TickInstant<C> {}

impl<C> PartialEq for TickInstant<C> {
  fn eq(&self, other: &Self) -> bool {
    self.ticks == other.ticks
  }
}

impl<C> Eq for TickInstant<C> {}

impl<C> PartialOrd for TickInstant<C> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<C> Ord for TickInstant<C> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.ticks.cmp(&other.ticks)
  }
}

impl<C> fmt::Debug for TickInstant<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TickInstant").field("ticks", &self.ticks).finish()
  }
}

impl<C: TickClock> ClockInstant for TickInstant<C> {
  type Duration = TickDuration<C>;

  fn time_since_epoch(&self) -> Self::Duration {
    TickDuration::from_ticks(self.ticks)
  }
}
