/* Modules */
pub mod config;
pub mod dispatcher;
pub mod elevator;
pub mod registry;
pub mod shared;

/* Re-exports */
pub use config::Config;
pub use dispatcher::{DestinationSource, FleetDispatcher};
pub use elevator::{Elevator, ElevatorKind, ElevatorProfile};
pub use registry::{FloorRegistry, InMemoryFloorRegistry};
pub use registry::{InMemoryPassengerRegistry, PassengerRegistry};
pub use shared::{Direction, DispatchReport, ElevatorStatus, FleetError, FleetEvent};
