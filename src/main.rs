/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{info, warn};
use serde::Serialize;
use std::thread::Builder;

/* Custom libraries */
use elevator_fleet::config;
use elevator_fleet::registry::Floor;
use elevator_fleet::unwrap_or_exit;
use elevator_fleet::{DispatchReport, ElevatorStatus, FleetDispatcher, FleetEvent};
use elevator_fleet::{FloorRegistry, InMemoryFloorRegistry, InMemoryPassengerRegistry};

/// Runs one dispatch against a simulated elevator fleet and prints the resulting status.
#[derive(Parser, Debug)]
#[clap(name = "elevator-fleet", version)]
struct Args {
    /// Path to the TOML configuration file
    #[clap(long, default_value = "config.toml")]
    config: String,

    /// Add an elevator of this kind (standard, highspeed, glass, freight) before dispatching
    #[clap(long = "add", value_name = "KIND")]
    add: Vec<String>,

    /// Floor where passengers are waiting
    #[clap(long, allow_hyphen_values = true)]
    floor: Option<i32>,

    /// Number of passengers waiting on --floor
    #[clap(long, default_value_t = 0)]
    passengers: u32,

    /// Destination of each waiting passenger, in arrival order
    #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
    destinations: Vec<i32>,

    /// Print the final status as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    report: Option<&'a DispatchReport>,
    elevators: Vec<ElevatorStatus>,
    floors: Vec<&'a Floor>,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let config = unwrap_or_exit!(
        config::load_config(&args.config),
        "Failed to load configuration"
    );

    // Create the fleet
    let floors = InMemoryFloorRegistry::new(config.building.min_floor, config.building.max_floor);
    let mut dispatcher = FleetDispatcher::new(&config, floors, InMemoryPassengerRegistry::new());

    // Start the event renderer
    let event_rx = dispatcher.subscribe();
    let event_thread = Builder::new().name("event_renderer".into());
    let event_renderer = unwrap_or_exit!(
        event_thread.spawn(move || render_events(event_rx)),
        "Failed to start event renderer"
    );

    for kind in &args.add {
        unwrap_or_exit!(dispatcher.add_elevator(kind), "Failed to add elevator");
    }

    if args.floor.is_none() && (args.passengers > 0 || !args.destinations.is_empty()) {
        warn!("--passengers and --destinations are ignored without --floor");
    }

    // Seed the floor and dispatch
    let report = args.floor.map(|floor| {
        let destinations = if args.destinations.is_empty() {
            None
        } else {
            Some(args.destinations.clone())
        };
        unwrap_or_exit!(
            dispatcher
                .floors_mut()
                .update_waiting_passengers(floor, args.passengers, destinations),
            "Failed to update waiting passengers"
        );
        unwrap_or_exit!(dispatcher.dispatch_waiting(floor), "Dispatch failed")
    });

    if let Some(report) = &report {
        if report.is_fully_served() {
            info!("Dispatch complete, elevators used: {:?}", report.elevators_used);
        } else {
            warn!(
                "{} passengers still waiting at floor {}",
                report.remaining, report.source_floor
            );
        }
    }

    // Status
    if args.json {
        let snapshot = Snapshot {
            report: report.as_ref(),
            elevators: dispatcher.status(),
            floors: dispatcher.floors().get_all_floors(),
        };
        println!(
            "{}",
            unwrap_or_exit!(serde_json::to_string_pretty(&snapshot), "Failed to render status")
        );
    } else {
        for status in dispatcher.status() {
            println!("{}", status);
        }
        for floor in dispatcher.floors().get_all_floors() {
            println!(
                "Floor {}: People Waiting: {}",
                floor.floor_number, floor.waiting_passengers
            );
        }
    }

    // Closing the fleet ends the event stream
    drop(dispatcher);
    if event_renderer.join().is_err() {
        warn!("Event renderer panicked");
    }
}

fn render_events(event_rx: cbc::Receiver<FleetEvent>) {
    for event in event_rx.iter() {
        match event {
            FleetEvent::Departed { id, to, .. } => {
                println!("Elevator {} is on its way to floor {}.", id, to)
            }
            FleetEvent::FloorPassed { id, floor } => println!("Elevator {} at floor {}", id, floor),
            FleetEvent::Arrived { id, floor } => {
                println!("Elevator {} has arrived at floor {}.", id, floor)
            }
            FleetEvent::AlreadyAtFloor { id, floor } => println!(
                "Elevator {} is already on floor {}. No movement required.",
                id, floor
            ),
            FleetEvent::Boarded { id, count, .. } => {
                println!("Elevator {} boarded {} passengers.", id, count)
            }
            FleetEvent::Exited { id, count, .. } => {
                println!("Elevator {} exited {} passengers.", id, count)
            }
            FleetEvent::ElevatorAdded { id, kind } => {
                println!("Added new {} elevator with ID {}.", kind, id)
            }
            FleetEvent::NoElevatorAvailable { .. } => {
                println!("No available elevators that can board any additional passengers.")
            }
            FleetEvent::DispatchFinished(_) => {}
        }
    }
}
