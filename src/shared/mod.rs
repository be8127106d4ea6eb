pub mod error;
pub mod macros;
pub mod structs;

pub use error::FleetError;
pub use error::Result;
pub use structs::Direction;
pub use structs::DispatchReport;
pub use structs::ElevatorStatus;
pub use structs::FleetEvent;
