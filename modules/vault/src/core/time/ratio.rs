
/// Compile-time rational describing the period of one duration tick, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
  num: u64,
  den: u64,
}

impl Ratio {
  /// One nanosecond.
  pub const NANO: Self = Self::new(1, 1_000_000_000);
  /// One microsecond.
  pub const MICRO: Self = Self::new(1, 1_000_000);
  /// One millisecond.
  pub const MILLI: Self = Self::new(1, 1_000);
  /// One second.
  pub const UNIT: Self = Self::new(1, 1);

  /// Creates a ratio, reduced to lowest terms.
  ///
  /// # Panics
  ///
  /// Panics when `num` or `den` is zero. In a `const` context this is a compile error.
  #[must_use]
  pub const fn new(num: u64, den: u64) -> Self {
    assert!(num != 0, "ratio numerator must not be zero");
    assert!(den != 0, "ratio denominator must not be zero");
    let divisor = gcd(num, den);
    Self { num: num / divisor, den: den / divisor }
  }

  /// Returns the numerator.
  #[must_use]
  pub const fn num(&self) -> u64 {
    self.num
  }

  /// Returns the denominator.
  #[must_use]
  pub const fn den(&self) -> u64 {
    self.den
  }

  /// Returns the length of `count` periods in nanoseconds, rounded up to the next whole
  /// nanosecond, or `None` when it does not fit into `u128`.
  ///
  /// Rounding up keeps a converted timeout from ending before the period it was given in.
  #[must_use]
  pub const fn nanos_for(&self, count: u64) -> Option<u128> {
    // u64 * u64 always fits into u128
    let periods = count as u128 * self.num as u128;
    match periods.checked_mul(NANOS_PER_SEC) {
      | Some(scaled) => Some(scaled.div_ceil(self.den as u128)),
      | None => None,
    }
  }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

const fn gcd(mut a: u64, mut b: u64) -> u64 {
  while b != 0 {
    let rem = a % b;
    a = b;
    b = rem;
  }
  a
}
