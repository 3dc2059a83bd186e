
/// Failure converting a domain-specific time value into [`core::time::Duration`].
///
/// The provided domains count unsigned ticks, so the only failure is a value too large for
/// `Duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimeConversionError {
  /// The value does not fit into a [`core::time::Duration`].
  #[error("time value overflows core::time::Duration")]
  Overflow,
}
