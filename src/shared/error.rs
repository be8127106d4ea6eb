/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("floor {floor} is outside the served range {min_floor}..={max_floor}")]
    FloorOutOfRange {
        floor: i32,
        min_floor: i32,
        max_floor: i32,
    },

    #[error("unknown elevator kind '{0}' (expected standard, highspeed, glass or freight)")]
    UnknownElevatorKind(String),

    #[error("no elevator with id {0}")]
    UnknownElevator(u32),

    #[error("no destination supplied for passenger {index} boarding at floor {floor}")]
    MissingDestination { floor: i32, index: u32 },

    #[error("elevator {id} cannot board {requested} passengers ({on_board}/{capacity} on board)")]
    CapacityExceeded {
        id: u32,
        requested: u32,
        on_board: u32,
        capacity: u32,
    },

    #[error("elevator {id} cannot let off {requested} passengers, only {on_board} on board")]
    Underflow {
        id: u32,
        requested: u32,
        on_board: u32,
    },
}

impl FleetError {
    /// Bad input from the caller, as opposed to a broken occupancy invariant.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FleetError::FloorOutOfRange { .. }
                | FleetError::UnknownElevatorKind(_)
                | FleetError::UnknownElevator(_)
                | FleetError::MissingDestination { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
