//! Primitives, condition variable and time domain backed by the standard library and
//! `parking_lot`.

mod parking_condvar;
mod parking_raw_mutex;
mod parking_raw_rw_lock;
mod std_time_domain;
mod std_vault_toolbox;

pub use parking_condvar::ParkingCondvar;
pub use parking_raw_mutex::ParkingRawMutex;
pub use parking_raw_rw_lock::ParkingRawRwLock;
pub use std_time_domain::StdTimeDomain;
pub use std_vault_toolbox::{StdRwVault, StdVault, StdVaultToolbox};
