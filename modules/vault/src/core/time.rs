//! Time domains accepted by timed primitives.
//!
//! A timed primitive names exactly one [`TimeDomain`]. Durations and deadlines from that domain
//! enter the locking core only through [`TimeDomain::remaining`] and [`ClockDuration::to_core`],
//! which convert them into [`core::time::Duration`] or fail explicitly.

mod arithmetic;
mod clock_duration;
mod clock_instant;
mod ratio;
mod tick_clock;
mod tick_domain;
mod tick_duration;
mod tick_instant;
mod time_conversion_error;
mod time_domain;
mod time_domain_kind;

pub use arithmetic::Arithmetic;
pub use clock_duration::ClockDuration;
pub use clock_instant::ClockInstant;
pub use ratio::Ratio;
pub use tick_clock::TickClock;
pub use tick_domain::TickDomain;
pub use tick_duration::TickDuration;
pub use tick_instant::TickInstant;
pub use time_conversion_error::TimeConversionError;
pub use time_domain::TimeDomain;
pub use time_domain_kind::TimeDomainKind;
