use super::{BasicLockable, Capabilities};

/// Primitive carrying its classification.
///
/// Implementations compute [`Classified::CAPABILITIES`] with one of the `classify_*` functions, so
/// the declared level is checked against the implemented traits once, at compile time.
///
/// ```
/// use synchro_vault_rs::core::{
///   capability::{CapabilityLevel, Classified},
///   primitives::SpinRawRwLock,
/// };
///
/// let caps = SpinRawRwLock::CAPABILITIES;
/// assert_eq!(caps.level(), CapabilityLevel::Shared);
/// assert!(caps.satisfies(CapabilityLevel::Basic));
/// assert!(!caps.is_timed());
/// ```
pub trait Classified: BasicLockable {
  /// Level and time domain of this primitive.
  const CAPABILITIES: Capabilities;
}
