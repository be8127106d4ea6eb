/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub id: u32,
    pub destination_floor: i32,
}

/// Passengers currently riding an elevator, keyed by where they get off.
pub trait PassengerRegistry {
    /// Records a passenger bound for `destination_floor` and returns its id.
    fn add_passenger(&mut self, destination_floor: i32) -> u32;

    fn get_passengers_by_floor(&self, floor: i32) -> Vec<Passenger>;

    /// Removes every passenger bound for `floor`, returning how many there were.
    fn remove_passengers_by_floor(&mut self, floor: i32) -> usize;

    fn remove_passenger(&mut self, id: u32) -> bool;

    fn get_all_passengers(&self) -> Vec<Passenger>;
}

/***************************************/
/*             Public API              */
/***************************************/
pub struct InMemoryPassengerRegistry {
    passengers: Vec<Passenger>,
    next_id: u32,
}

impl InMemoryPassengerRegistry {
    pub fn new() -> InMemoryPassengerRegistry {
        InMemoryPassengerRegistry {
            passengers: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryPassengerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PassengerRegistry for InMemoryPassengerRegistry {
    fn add_passenger(&mut self, destination_floor: i32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.passengers.push(Passenger {
            id,
            destination_floor,
        });
        id
    }

    fn get_passengers_by_floor(&self, floor: i32) -> Vec<Passenger> {
        self.passengers
            .iter()
            .filter(|p| p.destination_floor == floor)
            .copied()
            .collect()
    }

    fn remove_passengers_by_floor(&mut self, floor: i32) -> usize {
        let before = self.passengers.len();
        self.passengers.retain(|p| p.destination_floor != floor);
        before - self.passengers.len()
    }

    fn remove_passenger(&mut self, id: u32) -> bool {
        match self.passengers.iter().position(|p| p.id == id) {
            Some(index) => {
                self.passengers.remove(index);
                true
            }
            None => false,
        }
    }

    fn get_all_passengers(&self) -> Vec<Passenger> {
        self.passengers.clone()
    }
}
