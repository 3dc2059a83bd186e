use super::{ParkingCondvar, ParkingRawMutex, ParkingRawRwLock};
use crate::core::toolbox::{ToolboxRwVault, ToolboxVault, VaultToolbox};


/// Toolbox for std environments, backed by `parking_lot` primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdVaultToolbox;

impl VaultToolbox for StdVaultToolbox {
  type Condvar = ParkingCondvar;
  type Mutex = ParkingRawMutex;
  type RwLock = ParkingRawRwLock;
}

/// Convenience alias for the default std vault.
pub type StdVault<T> = ToolboxVault<T, StdVaultToolbox>;

/// Convenience alias for the default std reader/writer vault, which supports upgrades.
pub type StdRwVault<T> = ToolboxRwVault<T, StdVaultToolbox>;
