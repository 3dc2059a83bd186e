use super::ClockDuration;

/// Time-point contract accepted by timed primitives.
pub trait ClockInstant: Copy + Ord + core::fmt::Debug + Send + Sync + 'static {
  /// Duration type measuring distances between instants of this clock.
  type Duration: ClockDuration;

  /// Returns the distance from the clock's epoch to this instant.
  fn time_since_epoch(&self) -> Self::Duration;
}
