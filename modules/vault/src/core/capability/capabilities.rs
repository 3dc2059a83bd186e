use super::CapabilityLevel;
use crate::core::time::TimeDomainKind;

/// Classification result of a primitive: its level and, when timed, its time domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
  level:       CapabilityLevel,
  time_domain: Option<TimeDomainKind>,
}

impl Capabilities {
  pub(crate) const fn new(level: CapabilityLevel, time_domain: Option<TimeDomainKind>) -> Self {
    Self { level, time_domain }
  }

  /// Returns the richest level the primitive satisfies.
  #[must_use]
  pub const fn level(&self) -> CapabilityLevel {
    self.level
  }

  /// Returns the time domain of the bounded operations, or `None` for untimed primitives.
  #[must_use]
  pub const fn time_domain(&self) -> Option<TimeDomainKind> {
    self.time_domain
  }

  /// Returns `true` when the primitive offers bounded waits.
  #[must_use]
  pub const fn is_timed(&self) -> bool {
    self.time_domain.is_some()
  }

  /// Returns `true` when the primitive satisfies `level` (levels are cumulative).
  #[must_use]
  pub const fn satisfies(&self, level: CapabilityLevel) -> bool {
    self.level as u8 >= level as u8
  }

  /// Returns `true` when shared locking is available.
  #[must_use]
  pub const fn supports_shared(&self) -> bool {
    self.satisfies(CapabilityLevel::Shared)
  }

  /// Returns `true` when the upgradable state is available.
  #[must_use]
  pub const fn supports_upgrade(&self) -> bool {
    self.satisfies(CapabilityLevel::Upgrade)
  }
}
