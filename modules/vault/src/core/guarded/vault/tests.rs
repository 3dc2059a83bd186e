extern crate std;

use std::{string::String, vec, vec::Vec};

use super::Vault;
use crate::core::{
  capability::CapabilityLevel,
  condvar::SpinCondvar,
  guarded::LockState,
  primitives::{SpinRawMutex, SpinRawRwLock},
};

type SpinVault<T> = Vault<T, SpinRawMutex, SpinCondvar>;
type SpinRwVault<T> = Vault<T, SpinRawRwLock, SpinCondvar>;

#[test]
fn accessors_each_lock_once() {
  let vault = SpinVault::new(String::from("alpha"));
  assert_eq!(vault.copy_value(), "alpha");
  assert_eq!(vault.swap_value(String::from("beta")), "alpha");
  vault.assign_value(String::from("gamma"));
  assert_eq!(vault.with_value(String::len), 5);
  vault.with_value_mut(|value| value.push('!'));
  assert_eq!(vault.release_value(), "gamma!");
  assert!(vault.copy_value().is_empty());
  assert!(vault.try_lock().is_some());
}

#[test]
fn new_with_runs_initializer() {
  let vault = SpinVault::new_with(|| vec![1_u8, 2, 3]);
  assert_eq!(vault.into_inner(), vec![1, 2, 3]);
}

#[test]
fn try_lock_fails_while_handle_is_live() {
  let vault = SpinVault::new(0_u32);
  let handle = vault.lock();
  assert!(vault.try_lock().is_none());
  drop(handle);
  let handle = vault.try_lock();
  assert!(handle.is_some_and(|handle| handle.state() == LockState::Exclusive));
}

#[test]
fn clone_copies_value_into_an_unlocked_vault() {
  let vault = SpinVault::new(vec![4_u8]);
  let copy = vault.clone();
  let _held = vault.lock();
  assert!(copy.try_lock().is_some());
  copy.with_value_mut(|value| value.push(5));
  assert_eq!(copy.into_inner(), vec![4, 5]);
}

#[test]
fn get_mut_skips_locking() {
  let mut vault = SpinVault::<Vec<u32>>::default();
  vault.get_mut().push(7);
  assert_eq!(vault.copy_value(), vec![7]);
}

#[test]
fn shared_handles_coexist_and_exclude_writers() {
  let vault = SpinRwVault::from(11_u32);
  let first = vault.lock_shared();
  let second = vault.try_lock_shared();
  assert_eq!(first.state(), LockState::Shared);
  assert!(second.as_ref().is_some_and(|handle| *handle.value() == 11));
  assert!(vault.try_lock().is_none());
  drop(first);
  drop(second);
  assert!(vault.try_lock().is_some());
}

#[test]
fn writer_excludes_shared_handles() {
  let vault = SpinRwVault::new(1_u32);
  let writer = vault.lock();
  assert!(vault.try_lock_shared().is_none());
  drop(writer);
  assert!(vault.try_lock_shared().is_some());
}

#[test]
fn capabilities_follow_the_primitive() {
  assert_eq!(SpinVault::<u8>::capabilities().level(), CapabilityLevel::Basic);
  assert_eq!(SpinRwVault::<u8>::capabilities().level(), CapabilityLevel::Shared);
  assert!(!SpinRwVault::<u8>::capabilities().is_timed());
}

#[test]
fn debug_does_not_block_on_a_held_lock() {
  let vault = SpinVault::new(42_u32);
  assert_eq!(std::format!("{vault:?}"), "Vault { value: 42 }");
  let _handle = vault.lock();
  assert_eq!(std::format!("{vault:?}"), "Vault { value: <locked> }");
}
