/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::collections::BTreeMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{FleetError, Result};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub floor_number: i32,
    pub waiting_passengers: u32,
    /// One entry per waiting passenger that already picked a destination, in arrival order.
    pub destination_floors: Vec<i32>,
}

impl Floor {
    pub fn new(floor_number: i32) -> Floor {
        Floor {
            floor_number,
            waiting_passengers: 0,
            destination_floors: Vec::new(),
        }
    }
}

/// Waiting passengers per floor, as seen by the dispatcher.
pub trait FloorRegistry {
    fn get_floor(&self, floor: i32) -> Option<&Floor>;

    /// Sets the waiting count of `floor`. `Some(destinations)` replaces the
    /// pending destination list, `None` leaves it as is.
    fn update_waiting_passengers(
        &mut self,
        floor: i32,
        count: u32,
        destinations: Option<Vec<i32>>,
    ) -> Result<()>;

    /// All floors in ascending order.
    fn get_all_floors(&self) -> Vec<&Floor>;
}

/***************************************/
/*             Public API              */
/***************************************/
pub struct InMemoryFloorRegistry {
    floors: BTreeMap<i32, Floor>,
    min_floor: i32,
    max_floor: i32,
}

impl InMemoryFloorRegistry {
    /// Creates every floor in `min_floor..=max_floor` with nobody waiting.
    pub fn new(min_floor: i32, max_floor: i32) -> InMemoryFloorRegistry {
        let floors = (min_floor..=max_floor)
            .map(|n| (n, Floor::new(n)))
            .collect::<BTreeMap<i32, Floor>>();

        InMemoryFloorRegistry {
            floors,
            min_floor,
            max_floor,
        }
    }

    fn out_of_range(&self, floor: i32) -> FleetError {
        FleetError::FloorOutOfRange {
            floor,
            min_floor: self.min_floor,
            max_floor: self.max_floor,
        }
    }
}

impl FloorRegistry for InMemoryFloorRegistry {
    fn get_floor(&self, floor: i32) -> Option<&Floor> {
        self.floors.get(&floor)
    }

    fn update_waiting_passengers(
        &mut self,
        floor: i32,
        count: u32,
        destinations: Option<Vec<i32>>,
    ) -> Result<()> {
        if let Some(destinations) = &destinations {
            if let Some(bad) = destinations.iter().find(|d| !self.floors.contains_key(*d)) {
                return Err(self.out_of_range(*bad));
            }
        }

        let error = self.out_of_range(floor);
        let entry = self.floors.get_mut(&floor).ok_or(error)?;
        entry.waiting_passengers = count;
        if let Some(destinations) = destinations {
            entry.destination_floors = destinations;
        }
        Ok(())
    }

    fn get_all_floors(&self) -> Vec<&Floor> {
        self.floors.values().collect()
    }
}
