/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::FleetError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElevatorKind {
    Standard,
    HighSpeed,
    Glass,
    Freight,
}

impl ElevatorKind {
    pub const ALL: [ElevatorKind; 4] = [
        ElevatorKind::Standard,
        ElevatorKind::HighSpeed,
        ElevatorKind::Glass,
        ElevatorKind::Freight,
    ];

    pub fn per_floor_delay(&self) -> Duration {
        match *self {
            ElevatorKind::Standard => Duration::from_millis(1000),
            ElevatorKind::HighSpeed => Duration::from_millis(500),
            ElevatorKind::Glass => Duration::from_millis(1200),
            ElevatorKind::Freight => Duration::from_millis(1500),
        }
    }

    /// Seats given to an elevator added after start-up.
    pub fn default_capacity(&self) -> u32 {
        match *self {
            ElevatorKind::Standard => 10,
            ElevatorKind::HighSpeed => 15,
            ElevatorKind::Glass => 8,
            ElevatorKind::Freight => 5,
        }
    }

    /// Kind of the n-th elevator in the initial fleet.
    pub fn for_index(index: usize) -> ElevatorKind {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for ElevatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            ElevatorKind::Standard => "Standard",
            ElevatorKind::HighSpeed => "HighSpeed",
            ElevatorKind::Glass => "Glass",
            ElevatorKind::Freight => "Freight",
        };
        f.write_str(name)
    }
}

impl FromStr for ElevatorKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ElevatorKind::Standard),
            "highspeed" => Ok(ElevatorKind::HighSpeed),
            "glass" => Ok(ElevatorKind::Glass),
            "freight" => Ok(ElevatorKind::Freight),
            _ => Err(FleetError::UnknownElevatorKind(s.to_string())),
        }
    }
}

/**
 * Fixed movement parameters of one elevator.
 *
 * # Fields
 * - `kind`:            Which entry of the profile table this came from.
 * - `per_floor_delay`: Time spent travelling a single floor.
 * - `weight_capacity`: Load limit in kg. Only freight elevators carry one, and movement ignores it.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorProfile {
    kind: ElevatorKind,
    per_floor_delay: Duration,
    weight_capacity: Option<u32>,
}

impl ElevatorProfile {
    pub fn new(kind: ElevatorKind) -> ElevatorProfile {
        let weight_capacity = match kind {
            ElevatorKind::Freight => Some(2000),
            _ => None,
        };
        ElevatorProfile {
            kind,
            per_floor_delay: kind.per_floor_delay(),
            weight_capacity,
        }
    }

    /// Freight profile for an initial-fleet elevator, rated at 200 kg per seat.
    pub fn for_initial_fleet(kind: ElevatorKind, capacity: u32) -> ElevatorProfile {
        let mut profile = ElevatorProfile::new(kind);
        if profile.weight_capacity.is_some() {
            profile.weight_capacity = Some(capacity.saturating_mul(200));
        }
        profile
    }

    pub fn kind(&self) -> ElevatorKind {
        self.kind
    }

    pub fn per_floor_delay(&self) -> Duration {
        self.per_floor_delay
    }

    pub fn weight_capacity(&self) -> Option<u32> {
        self.weight_capacity
    }
}
