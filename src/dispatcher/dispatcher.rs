/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, MAX_TIME_SCALE};
use crate::dispatcher::DestinationSource;
use crate::elevator::{Elevator, ElevatorKind, ElevatorProfile};
use crate::registry::{FloorRegistry, PassengerRegistry};
use crate::shared::{DispatchReport, ElevatorStatus, FleetError, FleetEvent, Result};

/**
 * Owns the fleet and decides which elevator serves which passengers.
 *
 * All mutation goes through `&mut self`, so one dispatch call always runs to
 * completion before another can touch the same fleet. Movement is simulated
 * by sleeping the calling thread for each floor travelled.
 *
 * # Fields
 * - `elevators`:   The fleet, in creation order. Selection ties go to the earlier entry.
 * - `floors`:      Waiting passengers per floor.
 * - `passengers`:  Passengers currently riding, keyed by destination.
 * - `min_floor`:   Lowest served floor.
 * - `max_floor`:   Highest served floor.
 * - `time_scale`:  Multiplier applied to every per-floor delay.
 * - `subscribers`: Event stream senders. Disconnected ones are dropped on the next emit.
 */
pub struct FleetDispatcher<F: FloorRegistry, P: PassengerRegistry> {
    elevators: Vec<Elevator>,
    floors: F,
    passengers: P,
    min_floor: i32,
    max_floor: i32,
    time_scale: f64,
    subscribers: Vec<cbc::Sender<FleetEvent>>,
}

impl<F: FloorRegistry, P: PassengerRegistry> FleetDispatcher<F, P> {
    pub fn new(config: &Config, floors: F, passengers: P) -> FleetDispatcher<F, P> {
        let capacity = config.fleet.elevator_capacity;
        let min_floor = config.building.min_floor;

        let elevators = (0..config.fleet.n_elevators)
            .map(|id| {
                let kind = ElevatorKind::for_index(id as usize);
                let profile = ElevatorProfile::for_initial_fleet(kind, capacity);
                Elevator::new(id, profile, capacity, min_floor)
            })
            .collect::<Vec<Elevator>>();

        info!(
            "Fleet started with {} elevators of capacity {} serving floors {}..={}",
            elevators.len(),
            capacity,
            min_floor,
            config.building.max_floor
        );

        FleetDispatcher {
            elevators,
            floors,
            passengers,
            min_floor,
            max_floor: config.building.max_floor,
            time_scale: bounded_time_scale(config.simulation.time_scale),
            subscribers: Vec::new(),
        }
    }

    /// Opens a new receiver on the fleet's event stream.
    pub fn subscribe(&mut self) -> cbc::Receiver<FleetEvent> {
        let (event_tx, event_rx) = cbc::unbounded::<FleetEvent>();
        self.subscribers.push(event_tx);
        event_rx
    }

    /***************************************/
    /*              Queries                */
    /***************************************/
    pub fn get_elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn get_elevator(&self, id: u32) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id() == id)
    }

    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(Elevator::status).collect()
    }

    pub fn floors(&self) -> &F {
        &self.floors
    }

    pub fn floors_mut(&mut self) -> &mut F {
        &mut self.floors
    }

    pub fn passengers(&self) -> &P {
        &self.passengers
    }

    /***************************************/
    /*             Selection               */
    /***************************************/

    /// Nearest idle elevator with `min_seats` free, or `None` if every car is busy or full.
    pub fn find_nearest_available_elevator(
        &self,
        target_floor: i32,
        min_seats: u32,
    ) -> Option<&Elevator> {
        self.elevators
            .iter()
            .filter(|e| e.is_available(min_seats))
            .min_by_key(|e| e.distance_to(target_floor))
    }

    pub fn can_board(&self, id: u32, passengers: u32) -> Result<bool> {
        let idx = self.index_of(id)?;
        Ok(self.elevators[idx].can_board(passengers))
    }

    pub fn board(&mut self, id: u32, passengers: u32) -> Result<()> {
        let idx = self.index_of(id)?;
        self.board_index(idx, passengers)
    }

    pub fn exit(&mut self, id: u32, passengers: u32) -> Result<()> {
        let idx = self.index_of(id)?;
        self.exit_index(idx, passengers)
    }

    pub fn add_elevator(&mut self, kind: &str) -> Result<u32> {
        let kind = kind.parse::<ElevatorKind>()?;
        Ok(self.add_elevator_of_kind(kind))
    }

    pub fn add_elevator_of_kind(&mut self, kind: ElevatorKind) -> u32 {
        let id = self
            .elevators
            .iter()
            .map(Elevator::id)
            .max()
            .map_or(0, |max_id| max_id + 1);

        self.elevators.push(Elevator::new(
            id,
            ElevatorProfile::new(kind),
            kind.default_capacity(),
            self.min_floor,
        ));

        info!("Added new {} elevator with id {}", kind, id);
        self.emit(FleetEvent::ElevatorAdded { id, kind });
        id
    }

    /***************************************/
    /*              Movement               */
    /***************************************/
    pub fn move_to(&mut self, id: u32, target_floor: i32) -> Result<()> {
        let idx = self.index_of(id)?;
        self.move_index_to(idx, target_floor)
    }

    fn move_index_to(&mut self, idx: usize, target_floor: i32) -> Result<()> {
        let id = self.elevators[idx].id();
        let start_floor = self.elevators[idx].current_floor();

        if target_floor == start_floor {
            debug!("Elevator {} is already on floor {}", id, start_floor);
            self.emit(FleetEvent::AlreadyAtFloor {
                id,
                floor: start_floor,
            });
            return Ok(());
        }

        self.check_floor(target_floor)?;

        let direction = self.elevators[idx].begin_move(target_floor);
        let delay = self.floor_delay(idx);
        info!(
            "Elevator {} leaving floor {} for floor {} ({})",
            id, start_floor, target_floor, direction
        );
        self.emit(FleetEvent::Departed {
            id,
            from: start_floor,
            to: target_floor,
            direction,
        });

        while self.elevators[idx].current_floor() != target_floor {
            let floor = self.elevators[idx].advance_one_floor();
            debug!("Elevator {} passing floor {}", id, floor);
            self.emit(FleetEvent::FloorPassed { id, floor });
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        self.elevators[idx].stop();
        info!("Elevator {} arrived at floor {}", id, target_floor);
        self.emit(FleetEvent::Arrived {
            id,
            floor: target_floor,
        });
        Ok(())
    }

    /***************************************/
    /*              Dispatch               */
    /***************************************/

    /**
     * Serves `waiting_count` passengers waiting at `source_floor`.
     *
     * Each wave takes every idle elevator with a free seat, nearest first,
     * and sends it on one trip: fetch as many passengers as fit, then drop
     * them off floor by floor. Waves repeat until nobody is left waiting or
     * no elevator can take another passenger. Running out of elevators is
     * reported through `DispatchReport::remaining`, not as an error.
     * A `waiting_count` of 0 is a no-op, whatever the floor.
     */
    pub fn dispatch_elevators<D>(
        &mut self,
        source_floor: i32,
        waiting_count: u32,
        destinations: &mut D,
    ) -> Result<DispatchReport>
    where
        D: DestinationSource + ?Sized,
    {
        if waiting_count > 0 {
            self.check_floor(source_floor)?;
        }
        info!(
            "Dispatching elevators for {} passengers at floor {}",
            waiting_count, source_floor
        );

        let mut remaining = waiting_count;
        let mut elevators_used: Vec<u32> = Vec::new();

        while remaining > 0 {
            let candidates = self.available_by_distance(source_floor);
            if candidates.is_empty() {
                warn!(
                    "No available elevators can board more passengers, {} left waiting at floor {}",
                    remaining, source_floor
                );
                self.emit(FleetEvent::NoElevatorAvailable {
                    floor: source_floor,
                    remaining,
                });
                break;
            }

            for idx in candidates {
                if remaining == 0 {
                    break;
                }

                let boarded = self.serve_trip(idx, source_floor, remaining, &mut *destinations)?;
                if boarded == 0 {
                    continue;
                }
                remaining -= boarded;

                let id = self.elevators[idx].id();
                if !elevators_used.contains(&id) {
                    elevators_used.push(id);
                }
            }
        }

        let report = DispatchReport {
            source_floor,
            requested: waiting_count,
            remaining,
            elevators_used,
        };
        if report.is_fully_served() {
            info!(
                "All {} passengers from floor {} served",
                report.requested, source_floor
            );
        } else {
            warn!(
                "Served {} of {} passengers from floor {}",
                report.served(),
                report.requested,
                source_floor
            );
        }
        self.emit(FleetEvent::DispatchFinished(report.clone()));
        Ok(report)
    }

    /// Dispatches for everyone the floor registry lists as waiting at `source_floor`,
    /// using the floor's pending destinations.
    pub fn dispatch_waiting(&mut self, source_floor: i32) -> Result<DispatchReport> {
        let floor = self
            .floors
            .get_floor(source_floor)
            .ok_or_else(|| self.out_of_range(source_floor))?;

        let waiting = floor.waiting_passengers;
        let mut destinations = floor
            .destination_floors
            .iter()
            .copied()
            .collect::<VecDeque<i32>>();

        self.dispatch_elevators(source_floor, waiting, &mut destinations)
    }

    /// One trip of one elevator. Returns how many passengers it carried.
    fn serve_trip<D>(
        &mut self,
        idx: usize,
        source_floor: i32,
        remaining: u32,
        destinations: &mut D,
    ) -> Result<u32>
    where
        D: DestinationSource + ?Sized,
    {
        self.move_index_to(idx, source_floor)?;

        let to_board = remaining.min(self.elevators[idx].free_seats());
        if to_board == 0 {
            return Ok(0);
        }

        // Destinations are validated before anyone boards.
        let trip_destinations = self.collect_destinations(source_floor, to_board, &mut *destinations)?;

        self.board_index(idx, to_board)?;
        let trip_ids = trip_destinations
            .iter()
            .map(|&floor| self.passengers.add_passenger(floor))
            .collect::<Vec<u32>>();

        self.remove_boarded_from_floor(source_floor, to_board)?;

        for destination in distinct_in_order(&trip_destinations) {
            self.move_index_to(idx, destination)?;

            let arriving = self
                .passengers
                .get_passengers_by_floor(destination)
                .into_iter()
                .map(|p| p.id)
                .filter(|id| trip_ids.contains(id))
                .collect::<Vec<u32>>();

            self.exit_index(idx, arriving.len() as u32)?;
            for id in arriving {
                self.passengers.remove_passenger(id);
            }
        }

        Ok(to_board)
    }

    fn collect_destinations<D>(
        &self,
        source_floor: i32,
        count: u32,
        destinations: &mut D,
    ) -> Result<Vec<i32>>
    where
        D: DestinationSource + ?Sized,
    {
        (0..count)
            .map(|index| -> Result<i32> {
                let floor = destinations
                    .next_destination(source_floor)
                    .ok_or(FleetError::MissingDestination {
                        floor: source_floor,
                        index,
                    })?;
                self.check_floor(floor)?;
                Ok(floor)
            })
            .collect()
    }

    /// Takes the `boarded` passengers that just left `floor` off its waiting
    /// count and drops their destinations, so both shrink together.
    fn remove_boarded_from_floor(&mut self, floor: i32, boarded: u32) -> Result<()> {
        let (left, pending) = match self.floors.get_floor(floor) {
            Some(entry) => (
                entry.waiting_passengers.saturating_sub(boarded),
                entry
                    .destination_floors
                    .iter()
                    .skip(boarded as usize)
                    .copied()
                    .collect::<Vec<i32>>(),
            ),
            None => {
                warn!("Floor {} is not tracked by the floor registry", floor);
                return Ok(());
            }
        };

        self.floors.update_waiting_passengers(floor, left, Some(pending))
    }

    /***************************************/
    /*          Private helpers            */
    /***************************************/
    fn board_index(&mut self, idx: usize, passengers: u32) -> Result<()> {
        let elevator = &mut self.elevators[idx];
        elevator.add_passengers(passengers)?;

        let (id, floor) = (elevator.id(), elevator.current_floor());
        info!(
            "Elevator {} boarded {} passengers at floor {}",
            id, passengers, floor
        );
        self.emit(FleetEvent::Boarded {
            id,
            floor,
            count: passengers,
        });
        Ok(())
    }

    fn exit_index(&mut self, idx: usize, passengers: u32) -> Result<()> {
        let elevator = &mut self.elevators[idx];
        elevator.remove_passengers(passengers)?;

        let (id, floor) = (elevator.id(), elevator.current_floor());
        info!(
            "Elevator {} let off {} passengers at floor {}",
            id, passengers, floor
        );
        self.emit(FleetEvent::Exited {
            id,
            floor,
            count: passengers,
        });
        Ok(())
    }

    /// Indices of idle elevators with a free seat, nearest to `floor` first.
    fn available_by_distance(&self, floor: i32) -> Vec<usize> {
        let mut candidates = (0..self.elevators.len())
            .filter(|&idx| self.elevators[idx].is_available(1))
            .collect::<Vec<usize>>();
        candidates.sort_by_key(|&idx| self.elevators[idx].distance_to(floor));
        candidates
    }

    fn index_of(&self, id: u32) -> Result<usize> {
        self.elevators
            .iter()
            .position(|e| e.id() == id)
            .ok_or(FleetError::UnknownElevator(id))
    }

    fn floor_delay(&self, idx: usize) -> Duration {
        self.elevators[idx]
            .profile()
            .per_floor_delay()
            .mul_f64(self.time_scale)
    }

    fn check_floor(&self, floor: i32) -> Result<()> {
        if floor < self.min_floor || floor > self.max_floor {
            return Err(self.out_of_range(floor));
        }
        Ok(())
    }

    fn out_of_range(&self, floor: i32) -> FleetError {
        FleetError::FloorOutOfRange {
            floor,
            min_floor: self.min_floor,
            max_floor: self.max_floor,
        }
    }

    fn emit(&mut self, event: FleetEvent) {
        self.subscribers
            .retain(|event_tx| event_tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }
}

/// Keeps a hand-built config from producing delays `Duration` cannot hold.
fn bounded_time_scale(time_scale: f64) -> f64 {
    if time_scale.is_nan() {
        return 0.0;
    }
    time_scale.clamp(0.0, MAX_TIME_SCALE)
}

/// Distinct floors in first-seen order.
fn distinct_in_order(floors: &[i32]) -> Vec<i32> {
    let mut distinct: Vec<i32> = Vec::with_capacity(floors.len());
    for &floor in floors {
        if !distinct.contains(&floor) {
            distinct.push(floor);
        }
    }
    distinct
}
