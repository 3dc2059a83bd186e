//! The guarded-value core.
//!
//! A [`Vault`] embeds a control block holding the primitive, a condition variable and the value.
//! [`LockHandle`]s borrow that control block while they hold a lock on it; a [`ScopedUnlock`]
//! borrows a handle and gives its lock up for the duration of a scope. The control block itself is
//! private to this module.

mod binding;
mod control_block;
mod lock_handle;
mod lock_mode;
mod lock_state;
mod notification;
mod scoped_unlock;
mod unlocked_token;
mod vault;


pub use lock_handle::LockHandle;
pub use lock_state::LockState;
pub use notification::Notification;
pub use scoped_unlock::ScopedUnlock;
pub use unlocked_token::UnlockedToken;
pub use vault::Vault;
