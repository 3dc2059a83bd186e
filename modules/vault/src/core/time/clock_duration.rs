use core::time::Duration;

use super::{Arithmetic, Ratio, TimeConversionError};


/// Duration contract accepted by timed primitives.
///
/// A duration is a count of periods; [`ClockDuration::PERIOD`] gives the length of one period in
/// seconds. Crossing into the locking core always goes through [`ClockDuration::to_core`].
pub trait ClockDuration: Copy + Ord + core::fmt::Debug + Send + Sync + 'static {
  /// Numeric representation of the tick count.
  type Rep: Arithmetic;

  /// Length of one tick in seconds.
  const PERIOD: Ratio;

  /// Returns the number of ticks.
  fn count(&self) -> Self::Rep;

  /// Converts the duration into the internal representation.
  ///
  /// # Errors
  ///
  /// Returns [`TimeConversionError`] when the value cannot be represented as a [`Duration`].
  fn to_core(&self) -> Result<Duration, TimeConversionError>;
}

impl ClockDuration for Duration {
  type Rep = u128;

  const PERIOD: Ratio = Ratio::NANO;

  fn count(&self) -> Self::Rep {
    self.as_nanos()
  }

  fn to_core(&self) -> Result<Duration, TimeConversionError> {
    Ok(*self)
  }
}

/// Converts a tick count with the given period into a [`Duration`], rounding up to the next
/// whole nanosecond.
pub(crate) fn ticks_to_core(ticks: u64, period: Ratio) -> Result<Duration, TimeConversionError> {
  let nanos = period.nanos_for(ticks).ok_or(TimeConversionError::Overflow)?;
  let secs = u64::try_from(nanos / 1_000_000_000).map_err(|_| TimeConversionError::Overflow)?;
  // remainder is below one billion, so it always fits
  let subsec = (nanos % 1_000_000_000) as u32;
  Ok(Duration::new(secs, subsec))
}
