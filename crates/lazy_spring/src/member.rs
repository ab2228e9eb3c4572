//! Named spring members
//!
//! Lets callers address spring fields by name, e.g. when driving springs from
//! data or scripting layers. Names are case sensitive; each field also has a
//! short alias.

use std::fmt;
use std::str::FromStr;

use crate::error::SpringError;

/// A field of a [`Spring`](crate::Spring)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    Position,
    Velocity,
    Target,
    Damping,
    Speed,
    Clock,
}

impl Member {
    pub const ALL: [Member; 6] = [
        Member::Position,
        Member::Velocity,
        Member::Target,
        Member::Damping,
        Member::Speed,
        Member::Clock,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Member::Position => "Position",
            Member::Velocity => "Velocity",
            Member::Target => "Target",
            Member::Damping => "Damping",
            Member::Speed => "Speed",
            Member::Clock => "Clock",
        }
    }
}

impl FromStr for Member {
    type Err = SpringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Position" | "Value" | "p" => Ok(Member::Position),
            "Velocity" | "v" => Ok(Member::Velocity),
            "Target" | "t" => Ok(Member::Target),
            "Damping" | "d" => Ok(Member::Damping),
            "Speed" | "s" => Ok(Member::Speed),
            "Clock" => Ok(Member::Clock),
            other => Err(SpringError::InvalidMember(other.to_string())),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
