pub mod destinations;
pub mod dispatcher;

pub use destinations::DestinationSource;
pub use dispatcher::FleetDispatcher;
