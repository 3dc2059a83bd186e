use super::Ratio;

/// Monotonic tick source backing a [`TickDomain`](super::TickDomain).
///
/// Implementations are usually unit types reading a hardware counter or a global atomic.
pub trait TickClock: 'static {
  /// Length of one tick in seconds.
  const RESOLUTION: Ratio;

  /// Returns the current tick count. Must never decrease.
  fn now_ticks() -> u64;
}
