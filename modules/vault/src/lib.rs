#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::manual_assert)]
#![no_std]

//! Guarded values bound to a mutual-exclusion primitive.
//!
//! A [`Vault`](crate::core::guarded::Vault) owns a value together with the primitive that
//! protects it and a condition variable. The value is only reachable through a
//! [`LockHandle`](crate::core::guarded::LockHandle) or through short-lived convenience accessors
//! that lock for a single operation.
//!
//! Which operations a vault offers depends on the capability level of its primitive. The
//! [`capability`](crate::core::capability) traits classify primitives as basic, shared or
//! upgradable, optionally timed in exactly one [`TimeDomain`](crate::core::time::TimeDomain).
//!
//! The `core` module is `no_std`; the `std` module adds `parking_lot`-backed primitives, a parking
//! condition variable and the monotonic std time domain.

/// Runtime-agnostic capability traits, time domains and the guarded-value core.
pub mod core;
/// Primitives and time domains for std environments.
#[cfg(feature = "std")]
pub mod std;
