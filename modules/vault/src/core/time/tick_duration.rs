use core::{cmp::Ordering, fmt, marker::PhantomData, time::Duration};

use super::{ClockDuration, Ratio, TickClock, TimeConversionError, clock_duration::ticks_to_core};

/// Number of ticks of the clock `C`.
pub struct TickDuration<C> {
  ticks:  u64,
  _clock: PhantomData<fn() -> C>,
}

impl<C> TickDuration<C> {
  /// Zero-length duration.
  pub const ZERO: Self = Self::from_ticks(0);

  /// Creates a duration of `ticks` ticks.
  #[must_use]
  pub const fn from_ticks(ticks: u64) -> Self {
    Self { ticks, _clock: PhantomData }
  }

  /// Returns the tick count.
  #[must_use]
  pub const fn ticks(&self) -> u64 {
    self.ticks
  }

  /// Adds two durations, saturating on overflow.
  #[must_use]
  pub const fn saturating_add(self, other: Self) -> Self {
    Self::from_ticks(self.ticks.saturating_add(other.ticks))
  }
}

impl<C> Clone for TickDuration<C> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<C> Copy for TickDuration<C> {}

impl<C> PartialEq for TickDuration<C> {
  fn eq(&self, other: &Self) -> bool {
    self.ticks == other.ticks
  }
}

impl<C> Eq for TickDuration<C> {}

impl<C> PartialOrd for TickDuration<C> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<C> Ord for TickDuration<C> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.ticks.cmp(&other.ticks)
  }
}

impl<C> fmt::Debug for TickDuration<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TickDuration").field("ticks", &self.ticks).finish()
  }
}

impl<C: TickClock> ClockDuration for TickDuration<C> {
  type Rep = u64;

  const PERIOD: Ratio = C::RESOLUTION;

  fn count(&self) -> Self::Rep {
    self.ticks
  }

  fn to_core(&self) -> Result<Duration, TimeConversionError> {
    ticks_to_core(self.ticks, C::RESOLUTION)
  }
}
