mod sealed {
  pub trait Sealed {}
}

/// Primitive numeric types usable as the representation of a [`ClockDuration`](super::ClockDuration).
pub trait Arithmetic: sealed::Sealed + Copy + PartialOrd + core::fmt::Debug + Send + Sync + 'static {}

macro_rules! arithmetic {
  ($($ty:ty),* $(,)?) => {
    $(
      impl sealed::Sealed for $ty {}
      impl Arithmetic for $ty {}
    )*
  };
}

arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
