/// Notification a [`LockHandle`](super::LockHandle) sends when it is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notification {
  /// Send nothing.
  #[default]
  None,
  /// Call `notify_one` on the condition variable.
  One,
  /// Call `notify_all` on the condition variable.
  All,
}
