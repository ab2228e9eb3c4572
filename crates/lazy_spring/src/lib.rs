//! Lazy Spring
//!
//! Analytic damped-harmonic springs for animating scalars and vectors toward
//! a moving target.
//!
//! # Features
//!
//! - **Closed-form evaluation**: position and velocity are computed from
//!   elapsed time, so any time step (or a rewind) is exact and stable
//! - **Lazy state**: reads project the last settled state, writes settle first
//!   and never disturb the path already travelled
//! - **Injected clocks**: a process-wide monotonic default, or any `Fn() -> f64`
//! - **Generic values**: `f32`, `f64`, [`Vec2`], [`Vec3`], or any [`SpringValue`]
//! - **Named access**: string-keyed get/set with short aliases (`p`, `v`, `t`, `d`, `s`)
//!
//! # Example
//!
//! ```rust
//! use lazy_spring::{ManualClock, Spring};
//!
//! let clock = ManualClock::new(0.0);
//! let mut spring = Spring::new(0.0_f64).with_clock(clock.clone());
//!
//! spring.set_target(10.0);
//! clock.advance(1.0);
//!
//! let halfway = spring.position();
//! assert!(halfway > 0.0 && halfway < 10.0);
//!
//! clock.advance(100.0);
//! assert!(spring.is_settled(1e-6));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod math;
pub mod member;
pub mod spring;
pub mod values;

pub use clock::{Clock, ManualClock};
pub use config::{Regime, SpringConfig};
pub use error::{Result, SpringError};
pub use math::{Vec2, Vec3};
pub use member::Member;
pub use spring::{Spring, SpringState};
pub use values::SpringValue;
