use core::marker::PhantomData;

/// Marker for primitives whose lock may be released by a thread other than the one that acquired it.
///
/// Lock handles over such primitives are `Send`.
#[derive(Debug)]
pub struct GuardSend(());

/// Marker for primitives whose lock must be released by the acquiring thread.
///
/// Lock handles over such primitives are not `Send`.
#[derive(Debug)]
pub struct GuardNoSend(PhantomData<*mut ()>);
