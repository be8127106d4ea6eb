pub mod floors;
pub mod passengers;
pub mod registry_tests;

pub use floors::{Floor, FloorRegistry, InMemoryFloorRegistry};
pub use passengers::{InMemoryPassengerRegistry, Passenger, PassengerRegistry};
