/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{ElevatorKind, ElevatorProfile};
use crate::shared::{Direction, ElevatorStatus, FleetError, Result};

/**
 * A single car of the fleet and its movement state.
 *
 * The car is either idle at a floor (`Stationary`) or travelling one floor at
 * a time (`Up`/`Down`). Callers only ever see it through shared references;
 * every transition is crate-private and driven by the `FleetDispatcher`.
 *
 * # Fields
 * - `id`:              Unique id within the fleet.
 * - `profile`:         Kind and per-floor delay, fixed at construction.
 * - `current_floor`:   Floor the car is at (or just passed while moving).
 * - `capacity`:        Number of seats.
 * - `people_on_board`: Occupied seats, never above `capacity`.
 * - `is_moving`:       True exactly when `direction` is not `Stationary`.
 * - `direction`:       Current direction of travel.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    id: u32,
    profile: ElevatorProfile,
    current_floor: i32,
    capacity: u32,
    people_on_board: u32,
    is_moving: bool,
    direction: Direction,
}

impl Elevator {
    pub(crate) fn new(id: u32, profile: ElevatorProfile, capacity: u32, floor: i32) -> Elevator {
        Elevator {
            id,
            profile,
            current_floor: floor,
            capacity,
            people_on_board: 0,
            is_moving: false,
            direction: Direction::Stationary,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn profile(&self) -> &ElevatorProfile {
        &self.profile
    }

    pub fn kind(&self) -> ElevatorKind {
        self.profile.kind()
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn people_on_board(&self) -> u32 {
        self.people_on_board
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn free_seats(&self) -> u32 {
        self.capacity - self.people_on_board
    }

    pub fn can_board(&self, passengers: u32) -> bool {
        self.people_on_board
            .checked_add(passengers)
            .map_or(false, |total| total <= self.capacity)
    }

    /// Idle and with at least `min_seats` free.
    pub fn is_available(&self, min_seats: u32) -> bool {
        !self.is_moving && self.can_board(min_seats)
    }

    pub fn distance_to(&self, floor: i32) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            kind: self.kind(),
            floor: self.current_floor,
            is_moving: self.is_moving,
            direction: self.direction,
            people_on_board: self.people_on_board,
            capacity: self.capacity,
        }
    }

    /***************************************/
    /*          State transitions          */
    /***************************************/

    /// Idle -> MovingUp/MovingDown. Returns the chosen direction.
    pub(crate) fn begin_move(&mut self, target_floor: i32) -> Direction {
        self.direction = Direction::towards(self.current_floor, target_floor);
        self.is_moving = self.direction != Direction::Stationary;
        self.direction
    }

    /// Advances one floor in the current direction and returns the new floor.
    pub(crate) fn advance_one_floor(&mut self) -> i32 {
        self.current_floor += self.direction.step();
        self.current_floor
    }

    /// MovingUp/MovingDown -> Idle.
    pub(crate) fn stop(&mut self) {
        self.is_moving = false;
        self.direction = Direction::Stationary;
    }

    pub(crate) fn add_passengers(&mut self, passengers: u32) -> Result<()> {
        if !self.can_board(passengers) {
            return Err(FleetError::CapacityExceeded {
                id: self.id,
                requested: passengers,
                on_board: self.people_on_board,
                capacity: self.capacity,
            });
        }
        self.people_on_board += passengers;
        Ok(())
    }

    pub(crate) fn remove_passengers(&mut self, passengers: u32) -> Result<()> {
        if passengers > self.people_on_board {
            return Err(FleetError::Underflow {
                id: self.id,
                requested: passengers,
                on_board: self.people_on_board,
            });
        }
        self.people_on_board -= passengers;
        Ok(())
    }
}
