extern crate std;

use core::time::Duration;
use std::{sync::OnceLock, time::Instant};

use crate::core::time::{ClockInstant, TimeConversionError, TimeDomain, TimeDomainKind};


/// Deadline used when `now + timeout` does not fit in an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic time domain of the standard library: [`Duration`] and [`Instant`].
///
/// [`ClockInstant::time_since_epoch`] measures from the first time the epoch is read in the
/// process; instants taken earlier report zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdTimeDomain;

impl StdTimeDomain {
  fn epoch() -> Instant {
    *EPOCH.get_or_init(Instant::now)
  }
}

impl ClockInstant for Instant {
  type Duration = Duration;

  fn time_since_epoch(&self) -> Self::Duration {
    self.saturating_duration_since(StdTimeDomain::epoch())
  }
}

impl TimeDomain for StdTimeDomain {
  type Duration = Duration;
  type Instant = Instant;

  const KIND: TimeDomainKind = TimeDomainKind::StdMonotonic;

  fn now() -> Self::Instant {
    Instant::now()
  }

  fn deadline_after(timeout: Self::Duration) -> Self::Instant {
    let now = Instant::now();
    match now.checked_add(timeout) {
      | Some(deadline) => deadline,
      | None => now.checked_add(FAR_FUTURE).unwrap_or(now),
    }
  }

  fn remaining(deadline: &Self::Instant) -> Result<Duration, TimeConversionError> {
    Ok(deadline.saturating_duration_since(Instant::now()))
  }
}
