//! Spring configuration
//!
//! A spring is described by two numbers: the damping ratio ζ and a speed
//! multiplier ω (the undamped angular frequency). Presets are derived from
//! familiar stiffness/damping/mass triples via [`SpringConfig::from_physical`].

/// Damping regime of a spring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// ζ < 1, oscillates around the target
    Underdamped,
    /// ζ = 1, fastest approach without overshoot
    Critical,
    /// ζ > 1, slow approach without overshoot
    Overdamped,
}

impl Regime {
    /// Classify a damping ratio
    ///
    /// Only an exact ζ² = 1 counts as critical, matching the branch taken when
    /// the spring is evaluated.
    pub fn of(damping: f64) -> Self {
        let d2 = damping * damping;
        if d2 < 1.0 {
            Regime::Underdamped
        } else if d2 == 1.0 {
            Regime::Critical
        } else {
            Regime::Overdamped
        }
    }
}

/// Configuration for a spring
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Damping ratio ζ
    pub damping: f64,
    /// Time-scale multiplier ω
    pub speed: f64,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(damping: f64, speed: f64) -> Self {
        Self { damping, speed }
    }

    /// Convert a mass-spring-damper description into ratio/speed form
    ///
    /// `ω = sqrt(k / m)`, `ζ = c / (2 sqrt(k m))`. Degenerate inputs (zero
    /// stiffness or mass) yield a frozen spring.
    pub fn from_physical(stiffness: f64, damping: f64, mass: f64) -> Self {
        if stiffness <= 0.0 || mass <= 0.0 {
            return Self::new(damping.max(0.0), 0.0);
        }
        let critical = 2.0 * (stiffness * mass).sqrt();
        Self {
            damping: (damping / critical).max(0.0),
            speed: (stiffness / mass).sqrt(),
        }
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self::from_physical(120.0, 14.0, 1.0)
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self::from_physical(180.0, 12.0, 1.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::from_physical(400.0, 30.0, 1.0)
    }

    /// A very stiff spring with minimal oscillation
    pub fn snappy() -> Self {
        Self::from_physical(600.0, 40.0, 1.0)
    }

    /// A slow spring with no overshoot
    pub fn molasses() -> Self {
        Self::from_physical(100.0, 20.0, 1.0)
    }

    /// Exactly critically damped at the given speed
    pub fn critical(speed: f64) -> Self {
        Self::new(1.0, speed)
    }

    pub fn regime(&self) -> Regime {
        Regime::of(self.damping)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 1.0,
            speed: 1.0,
        }
    }
}
