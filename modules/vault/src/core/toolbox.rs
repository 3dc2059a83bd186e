//! Toolbox abstraction selecting the primitive and condition variable families of a vault.

use crate::core::{
  capability::{Classified, Mutex, SharedLockable},
  condvar::{CondvarLike, SpinCondvar},
  guarded::Vault,
  primitives::{SpinRawMutex, SpinRawRwLock},
};


/// Bundles the primitives an environment provides for guarded values.
pub trait VaultToolbox: Send + Sync + 'static {
  /// Exclusive primitive used by [`ToolboxVault`].
  type Mutex: Mutex + Classified;
  /// Reader/writer primitive used by [`ToolboxRwVault`].
  type RwLock: Mutex + SharedLockable + Classified;
  /// Condition variable embedded in every vault of the toolbox.
  type Condvar: CondvarLike;
}

/// Default toolbox for no_std environments, backed by spin primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStdVaultToolbox;

impl VaultToolbox for NoStdVaultToolbox {
  type Condvar = SpinCondvar;
  type Mutex = SpinRawMutex;
  type RwLock = SpinRawRwLock;
}

/// Vault over the exclusive primitive of the selected toolbox.
pub type ToolboxVault<T, TB> = Vault<T, <TB as VaultToolbox>::Mutex, <TB as VaultToolbox>::Condvar>;

/// Vault over the reader/writer primitive of the selected toolbox.
pub type ToolboxRwVault<T, TB> = Vault<T, <TB as VaultToolbox>::RwLock, <TB as VaultToolbox>::Condvar>;

/// Convenience alias for the default no_std vault.
pub type SpinVault<T> = ToolboxVault<T, NoStdVaultToolbox>;

/// Convenience alias for the default no_std reader/writer vault.
pub type SpinRwVault<T> = ToolboxRwVault<T, NoStdVaultToolbox>;
