use core::{
  sync::atomic::{AtomicU64, Ordering},
  time::Duration,
};

use super::TickDomain;
use crate::core::time::{
  ClockDuration, ClockInstant, Ratio, TickClock, TickDuration, TickInstant, TimeDomain, TimeDomainKind,
};

static NOW: AtomicU64 = AtomicU64::new(100);

struct FrozenClock;

impl TickClock for FrozenClock {
  const RESOLUTION: Ratio = Ratio::MILLI;

  fn now_ticks() -> u64 {
    NOW.load(Ordering::SeqCst)
  }
}

type Domain = TickDomain<FrozenClock>;

static PICO_NOW: AtomicU64 = AtomicU64::new(5_000);

/// Frozen clock ticking in picoseconds.
struct PicoClock;

impl TickClock for PicoClock {
  const RESOLUTION: Ratio = Ratio::new(1, 1_000_000_000_000);

  fn now_ticks() -> u64 {
    PICO_NOW.load(Ordering::SeqCst)
  }
}

#[test]
fn tick_domain_reports_kind_and_period() {
  assert_eq!(<Domain as TimeDomain>::KIND, TimeDomainKind::Tick);
  assert_eq!(<TickDuration<FrozenClock> as ClockDuration>::PERIOD, Ratio::MILLI);
}

#[test]
fn deadline_arithmetic_uses_clock_ticks() {
  let now = Domain::now();
  let deadline = Domain::deadline_after(TickDuration::from_ticks(25));
  assert_eq!(deadline.ticks(), now.ticks() + 25);
  assert_eq!(deadline.time_since_epoch(), TickDuration::from_ticks(now.ticks() + 25));
  assert_eq!(Domain::remaining(&deadline), Ok(Duration::from_millis(25)));
  assert!(!Domain::has_elapsed(&deadline));
}

#[test]
fn passed_deadline_has_zero_remaining() {
  let past = TickInstant::<FrozenClock>::from_ticks(0);
  assert_eq!(Domain::remaining(&past), Ok(Duration::ZERO));
  assert!(Domain::has_elapsed(&past));
}

#[test]
fn saturating_add_stops_at_end_of_timeline() {
  let late = TickInstant::<FrozenClock>::from_ticks(u64::MAX - 1);
  assert_eq!(late.saturating_add(TickDuration::from_ticks(10)).ticks(), u64::MAX);
}

#[test]
fn sub_nanosecond_remaining_is_not_rounded_to_zero() {
  type Pico = TickDomain<PicoClock>;
  let deadline = Pico::deadline_after(TickDuration::from_ticks(1));
  assert!(!Pico::has_elapsed(&deadline));
  assert_eq!(Pico::remaining(&deadline), Ok(Duration::from_nanos(1)));

  let deadline = Pico::deadline_after(TickDuration::from_ticks(2_000_000_500));
  assert_eq!(Pico::remaining(&deadline), Ok(Duration::from_nanos(2_000_001)));
}
