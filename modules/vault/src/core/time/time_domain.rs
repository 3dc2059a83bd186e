use core::time::Duration;

use super::{ClockDuration, ClockInstant, TimeConversionError, TimeDomainKind};

/// Family of duration and time-point types used by a timed primitive.
///
/// Every timed operation of a primitive accepts values from the single domain it names, so two
/// incompatible families can never meet inside one vault.
pub trait TimeDomain: 'static {
  /// Tag identifying the family.
  const KIND: TimeDomainKind;

  /// Duration type of the domain.
  type Duration: ClockDuration;

  /// Time-point type of the domain.
  type Instant: ClockInstant<Duration = Self::Duration>;

  /// Reads the domain's clock.
  fn now() -> Self::Instant;

  /// Returns the deadline lying `timeout` after now, saturating at the clock's limit.
  fn deadline_after(timeout: Self::Duration) -> Self::Instant;

  /// Returns how long remains until `deadline`, or zero when it has passed.
  ///
  /// # Errors
  ///
  /// Returns [`TimeConversionError`] when the remaining time cannot be represented as a
  /// [`Duration`].
  fn remaining(deadline: &Self::Instant) -> Result<Duration, TimeConversionError>;

  /// Returns `true` once `deadline` is not in the future.
  fn has_elapsed(deadline: &Self::Instant) -> bool {
    Self::now() >= *deadline
  }
}
