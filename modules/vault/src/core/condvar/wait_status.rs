/// Outcome of a bounded condition-variable wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaitStatus {
  /// The wait ended by a notification (or a spurious wakeup).
  Notified,
  /// The deadline passed first.
  TimedOut,
}

impl WaitStatus {
  /// Returns `true` when the deadline passed.
  #[must_use]
  pub const fn timed_out(&self) -> bool {
    matches!(self, WaitStatus::TimedOut)
  }
}
