pub mod fsm;
pub mod fsm_tests;
pub mod profile;

pub use fsm::Elevator;
pub use profile::ElevatorKind;
pub use profile::ElevatorProfile;
