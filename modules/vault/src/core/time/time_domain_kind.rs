/// Identifies the family of duration and time-point types a timed primitive accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeDomainKind {
  /// `core::time::Duration` with `std::time::Instant` deadlines.
  StdMonotonic,
  /// Tick counts of a [`TickClock`](super::TickClock).
  Tick,
}
