use core::{marker::PhantomData, time::Duration};

use super::{ClockDuration, TickClock, TickDuration, TickInstant, TimeConversionError, TimeDomain, TimeDomainKind};

#[cfg(test)]
mod tests;

/// Time domain counting ticks of the clock `C`.
///
/// Two tick domains over different clocks are distinct types and cannot be mixed.
pub struct TickDomain<C>(PhantomData<fn() -> C>);

impl<C: TickClock> TimeDomain for TickDomain<C> {
  type Duration = TickDuration<C>;
  type Instant = TickInstant<C>;

  const KIND: TimeDomainKind = TimeDomainKind::Tick;

  fn now() -> Self::Instant {
    TickInstant::from_ticks(C::now_ticks())
  }

  fn deadline_after(timeout: Self::Duration) -> Self::Instant {
    Self::now().saturating_add(timeout)
  }

  fn remaining(deadline: &Self::Instant) -> Result<Duration, TimeConversionError> {
    deadline.saturating_duration_since(Self::now()).to_core()
  }
}
