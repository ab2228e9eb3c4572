//! Analytic spring animation
//!
//! A [`Spring`] stores the state of a damped harmonic oscillator as of the
//! last write and evaluates the closed-form solution whenever it is read.
//! There is no per-frame stepping: the result is exact for any elapsed time,
//! however large, and rewinding works the same way as fast-forwarding.

use crate::clock::Clock;
use crate::config::{Regime, SpringConfig};
use crate::error::{Result, SpringError};
use crate::member::Member;
use crate::values::SpringValue;

/// Position and velocity of a spring at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState<T> {
    pub position: T,
    pub velocity: T,
    /// Clock reading the state was evaluated at
    pub time: f64,
}

/// A lazily evaluated damped spring
///
/// Reads (`position`, `velocity`) project the last settled state to the
/// current clock time without storing the result. Writes settle the state at
/// the current time first and then change the requested field, so the path
/// travelled before the write is never altered.
#[derive(Clone, Debug)]
pub struct Spring<T: SpringValue> {
    position: T,
    velocity: T,
    target: T,
    initial: T,
    damping: f64,
    speed: f64,
    /// Clock reading at which `position` and `velocity` are valid
    time: f64,
    clock: Clock,
}

fn clamp_non_negative(field: &'static str, value: f64) -> f64 {
    if value < 0.0 {
        tracing::warn!(param = field, value, "negative spring parameter clamped to 0");
        0.0
    } else {
        value
    }
}

impl<T: SpringValue> Spring<T> {
    /// Critically damped unit-speed spring at rest on `initial`, driven by the
    /// monotonic clock
    pub fn new(initial: T) -> Self {
        Self::with_parts(initial, 1.0, 1.0, Clock::monotonic())
    }

    pub fn from_config(initial: T, config: SpringConfig) -> Self {
        Self::with_parts(initial, config.damping, config.speed, Clock::monotonic())
    }

    pub fn with_parts(initial: T, damping: f64, speed: f64, clock: Clock) -> Self {
        let time = clock.now();
        Self {
            position: initial,
            velocity: T::zero(),
            target: initial,
            initial,
            damping: clamp_non_negative("damping", damping),
            speed: clamp_non_negative("speed", speed),
            time,
            clock,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.set_damping(damping);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn with_clock(mut self, clock: impl Into<Clock>) -> Self {
        self.set_clock(clock.into());
        self
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Closed-form position and velocity at clock reading `now`
    fn evaluate(&self, now: f64) -> (T, T) {
        let dt = self.speed * (now - self.time);
        if dt == 0.0 {
            // Also covers speed 0, where the velocity term below would be 0/0
            return (self.position, self.velocity);
        }

        let d = self.damping;
        let s = self.speed;
        let d2 = d * d;

        let (h, cos_theta, sin_theta) = match Regime::of(d) {
            Regime::Underdamped => {
                let h = (1.0 - d2).sqrt();
                let ep = (-d * dt).exp() / h;
                (h, ep * (h * dt).cos(), ep * (h * dt).sin())
            }
            Regime::Critical => {
                let ep = (-d * dt).exp();
                (1.0, ep, ep * dt)
            }
            Regime::Overdamped => {
                let h = (d2 - 1.0).sqrt();
                let u = ((-d + h) * dt).exp() / (2.0 * h);
                let v = ((-d - h) * dt).exp() / (2.0 * h);
                (h, u + v, u - v)
            }
        };

        let pull_to_target = 1.0 - (h * cos_theta + d * sin_theta);
        let vel_pos_push = sin_theta / s;
        let vel_push_rate = s * sin_theta;
        let velocity_decay = h * cos_theta - d * sin_theta;

        let diff = self.target.sub(self.position);
        let position = self
            .position
            .add(diff.scale(pull_to_target))
            .add(self.velocity.scale(vel_pos_push));
        let velocity = diff
            .scale(vel_push_rate)
            .add(self.velocity.scale(velocity_decay));

        (position, velocity)
    }

    /// Commit the state at the current clock reading
    fn settle(&mut self) {
        let now = self.clock.now();
        let (position, velocity) = self.evaluate(now);
        self.position = position;
        self.velocity = velocity;
        self.time = now;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn position(&self) -> T {
        self.evaluate(self.clock.now()).0
    }

    pub fn velocity(&self) -> T {
        self.evaluate(self.clock.now()).1
    }

    /// Position and velocity from a single clock reading
    pub fn snapshot(&self) -> SpringState<T> {
        let now = self.clock.now();
        let (position, velocity) = self.evaluate(now);
        SpringState {
            position,
            velocity,
            time: now,
        }
    }

    pub fn target(&self) -> T {
        self.target
    }

    /// The value the spring was created with, used by [`Spring::reset`]
    pub fn initial(&self) -> T {
        self.initial
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Clock reading of the last write
    pub fn settled_at(&self) -> f64 {
        self.time
    }

    pub fn config(&self) -> SpringConfig {
        SpringConfig::new(self.damping, self.speed)
    }

    pub fn regime(&self) -> Regime {
        Regime::of(self.damping)
    }

    /// Check if the spring is within `epsilon` of its target and nearly at rest
    pub fn is_settled(&self, epsilon: f64) -> bool {
        let state = self.snapshot();
        state.position.approx_eq(&self.target, epsilon)
            && state.velocity.approx_eq(&T::zero(), epsilon)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_position(&mut self, position: T) {
        self.settle();
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: T) {
        self.settle();
        self.velocity = velocity;
    }

    pub fn set_target(&mut self, target: T) {
        self.settle();
        self.target = target;
    }

    /// Negative values are clamped to 0
    pub fn set_damping(&mut self, damping: f64) {
        self.settle();
        self.damping = clamp_non_negative("damping", damping);
    }

    /// Negative values are clamped to 0; a speed of 0 freezes the spring
    pub fn set_speed(&mut self, speed: f64) {
        self.settle();
        self.speed = clamp_non_negative("speed", speed);
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.settle();
        self.damping = clamp_non_negative("damping", config.damping);
        self.speed = clamp_non_negative("speed", config.speed);
    }

    /// Swap the time source
    ///
    /// The state is settled against the old clock, then re-anchored to the
    /// new clock's current reading.
    pub fn set_clock(&mut self, clock: Clock) {
        let (position, velocity) = self.evaluate(self.clock.now());
        self.position = position;
        self.velocity = velocity;
        self.time = clock.now();
        tracing::debug!(time = self.time, "spring clock replaced");
        self.clock = clock;
    }

    /// Jump to rest at `target`, or at the initial value when `None`
    pub fn reset(&mut self, target: Option<T>) {
        let target = target.unwrap_or(self.initial);
        self.position = target;
        self.target = target;
        self.velocity = T::zero();
        self.time = self.clock.now();
        tracing::trace!(to = ?target, "spring reset");
    }

    /// Add `delta` to the current velocity
    pub fn impulse(&mut self, delta: T) {
        let velocity = self.velocity();
        self.set_velocity(velocity.add(delta));
        tracing::trace!(?delta, "spring impulse");
    }

    /// Simulate `delta` seconds of motion (negative rewinds) while keeping the
    /// spring anchored to the real current time
    pub fn time_skip(&mut self, delta: f64) {
        let now = self.clock.now();
        let (position, velocity) = self.evaluate(now + delta);
        self.position = position;
        self.velocity = velocity;
        self.time = now;
        tracing::trace!(delta, "spring time skip");
    }

    // =========================================================================
    // Named access
    // =========================================================================

    /// Read `Position`, `Velocity` or `Target` by name
    pub fn get_vector(&self, name: &str) -> Result<T> {
        match name.parse::<Member>()? {
            Member::Position => Ok(self.position()),
            Member::Velocity => Ok(self.velocity()),
            Member::Target => Ok(self.target),
            Member::Damping | Member::Speed | Member::Clock => {
                Err(SpringError::InvalidMember(name.to_string()))
            }
        }
    }

    /// Write `Position`, `Velocity` or `Target` by name
    pub fn set_vector(&mut self, name: &str, value: T) -> Result<()> {
        match name.parse::<Member>()? {
            Member::Position => self.set_position(value),
            Member::Velocity => self.set_velocity(value),
            Member::Target => self.set_target(value),
            Member::Damping | Member::Speed | Member::Clock => {
                return Err(SpringError::InvalidMember(name.to_string()))
            }
        }
        Ok(())
    }

    /// Read `Damping` or `Speed` by name
    pub fn get_scalar(&self, name: &str) -> Result<f64> {
        match name.parse::<Member>()? {
            Member::Damping => Ok(self.damping),
            Member::Speed => Ok(self.speed),
            Member::Position | Member::Velocity | Member::Target | Member::Clock => {
                Err(SpringError::InvalidMember(name.to_string()))
            }
        }
    }

    /// Write `Damping` or `Speed` by name
    pub fn set_scalar(&mut self, name: &str, value: f64) -> Result<()> {
        match name.parse::<Member>()? {
            Member::Damping => self.set_damping(value),
            Member::Speed => self.set_speed(value),
            Member::Position | Member::Velocity | Member::Target | Member::Clock => {
                return Err(SpringError::InvalidMember(name.to_string()))
            }
        }
        Ok(())
    }
}
