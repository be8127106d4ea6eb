/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorKind;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stationary,
}

impl Direction {
    /// Direction of travel from `from` towards `to`.
    pub fn towards(from: i32, to: i32) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Stationary
        }
    }

    pub fn step(&self) -> i32 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Stationary => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Stationary => "Stationary",
        };
        f.write_str(name)
    }
}

/**
 * Read-only status line for one elevator.
 *
 * Rendered by the binary either through `Display` or as JSON.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub id: u32,
    pub kind: ElevatorKind,
    pub floor: i32,
    #[serde(rename = "isMoving")]
    pub is_moving: bool,
    pub direction: Direction,
    #[serde(rename = "peopleOnBoard")]
    pub people_on_board: u32,
    pub capacity: u32,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator {} ({}): Floor {}, Moving: {}, Direction: {}, People On Board: {}, Capacity: {}",
            self.id,
            self.kind,
            self.floor,
            self.is_moving,
            self.direction,
            self.people_on_board,
            self.capacity
        )
    }
}

/**
 * Notifications emitted by the dispatcher.
 *
 * Subscribers receive these over a crossbeam channel, in the order the
 * dispatcher performed the corresponding state changes. One `FloorPassed`
 * is emitted per floor travelled, including the arrival floor.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum FleetEvent {
    ElevatorAdded { id: u32, kind: ElevatorKind },
    Departed { id: u32, from: i32, to: i32, direction: Direction },
    FloorPassed { id: u32, floor: i32 },
    Arrived { id: u32, floor: i32 },
    AlreadyAtFloor { id: u32, floor: i32 },
    Boarded { id: u32, floor: i32, count: u32 },
    Exited { id: u32, floor: i32, count: u32 },
    NoElevatorAvailable { floor: i32, remaining: u32 },
    DispatchFinished(DispatchReport),
}

/**
 * Outcome of one dispatch call.
 *
 * `remaining > 0` means the loop ran out of elevators with free seats before
 * the queue was empty. That is a status, not an error.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub source_floor: i32,
    pub requested: u32,
    pub remaining: u32,
    pub elevators_used: Vec<u32>,
}

impl DispatchReport {
    pub fn is_fully_served(&self) -> bool {
        self.remaining == 0
    }

    pub fn served(&self) -> u32 {
        self.requested - self.remaining
    }
}
