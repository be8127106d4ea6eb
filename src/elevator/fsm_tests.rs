/*
 * Unit tests for the elevator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_elevator_initial_state
 * - test_begin_move_sets_direction
 * - test_begin_move_to_current_floor_stays_idle
 * - test_advance_one_floor_steps_towards_target
 * - test_add_passengers_respects_capacity
 * - test_remove_passengers_underflow
 * - test_can_board_does_not_overflow
 * - test_profile_table
 * - test_freight_weight_capacity
 * - test_kind_parsing
 * - test_status_rendering
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod fsm_tests {
    use crate::elevator::{Elevator, ElevatorKind, ElevatorProfile};
    use crate::shared::Direction::{Down, Stationary, Up};
    use crate::shared::FleetError;
    use std::time::Duration;

    fn setup_elevator(capacity: u32, floor: i32) -> Elevator {
        Elevator::new(0, ElevatorProfile::new(ElevatorKind::Standard), capacity, floor)
    }

    #[test]
    fn test_elevator_initial_state() {
        // Purpose: Verify that a new elevator is idle, empty and at the given floor

        // Arrange & Act
        let elevator = setup_elevator(8, 2);

        // Assert
        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(elevator.people_on_board(), 0);
        assert_eq!(elevator.capacity(), 8);
        assert!(!elevator.is_moving());
        assert_eq!(elevator.direction(), Stationary);
    }

    #[test]
    fn test_begin_move_sets_direction() {
        // Arrange
        let mut up = setup_elevator(8, 2);
        let mut down = setup_elevator(8, 2);

        // Act
        let up_direction = up.begin_move(5);
        let down_direction = down.begin_move(0);

        // Assert
        assert_eq!(up_direction, Up);
        assert!(up.is_moving());
        assert_eq!(down_direction, Down);
        assert!(down.is_moving());
    }

    #[test]
    fn test_begin_move_to_current_floor_stays_idle() {
        let mut elevator = setup_elevator(8, 3);

        let direction = elevator.begin_move(3);

        assert_eq!(direction, Stationary);
        assert!(!elevator.is_moving());
    }

    #[test]
    fn test_advance_one_floor_steps_towards_target() {
        // Purpose: Verify one floor per step, then back to idle on stop

        // Arrange
        let mut elevator = setup_elevator(8, 4);
        elevator.begin_move(1);

        // Act
        let visited: Vec<i32> = (0..3).map(|_| elevator.advance_one_floor()).collect();
        elevator.stop();

        // Assert
        assert_eq!(visited, vec![3, 2, 1]);
        assert_eq!(elevator.current_floor(), 1);
        assert!(!elevator.is_moving());
        assert_eq!(elevator.direction(), Stationary);
    }

    #[test]
    fn test_add_passengers_respects_capacity() {
        // Arrange
        let mut elevator = setup_elevator(5, 0);

        // Act
        elevator.add_passengers(3).unwrap();
        let result = elevator.add_passengers(3);

        // Assert
        assert_eq!(
            result,
            Err(FleetError::CapacityExceeded {
                id: 0,
                requested: 3,
                on_board: 3,
                capacity: 5
            })
        );
        assert_eq!(elevator.people_on_board(), 3);
        elevator.add_passengers(2).unwrap();
        assert_eq!(elevator.people_on_board(), 5);
        assert_eq!(elevator.free_seats(), 0);
    }

    #[test]
    fn test_remove_passengers_underflow() {
        let mut elevator = setup_elevator(10, 0);
        elevator.add_passengers(2).unwrap();

        let result = elevator.remove_passengers(3);

        assert!(matches!(result, Err(FleetError::Underflow { requested: 3, on_board: 2, .. })));
        assert_eq!(elevator.people_on_board(), 2);
    }

    #[test]
    fn test_can_board_does_not_overflow() {
        let mut elevator = setup_elevator(10, 0);
        elevator.add_passengers(1).unwrap();

        assert!(!elevator.can_board(u32::MAX));
        assert!(elevator.can_board(9));
        assert!(!elevator.can_board(10));
    }

    #[test]
    fn test_profile_table() {
        assert_eq!(ElevatorKind::Standard.per_floor_delay(), Duration::from_millis(1000));
        assert_eq!(ElevatorKind::HighSpeed.per_floor_delay(), Duration::from_millis(500));
        assert_eq!(ElevatorKind::Glass.per_floor_delay(), Duration::from_millis(1200));
        assert_eq!(ElevatorKind::Freight.per_floor_delay(), Duration::from_millis(1500));
        assert_eq!(ElevatorKind::for_index(0), ElevatorKind::Standard);
        assert_eq!(ElevatorKind::for_index(3), ElevatorKind::Freight);
        assert_eq!(ElevatorKind::for_index(5), ElevatorKind::HighSpeed);
    }

    #[test]
    fn test_freight_weight_capacity() {
        assert_eq!(ElevatorProfile::new(ElevatorKind::Freight).weight_capacity(), Some(2000));
        assert_eq!(
            ElevatorProfile::for_initial_fleet(ElevatorKind::Freight, 8).weight_capacity(),
            Some(1600)
        );
        assert_eq!(ElevatorProfile::new(ElevatorKind::Glass).weight_capacity(), None);
        assert_eq!(
            ElevatorProfile::for_initial_fleet(ElevatorKind::Standard, 8).weight_capacity(),
            None
        );
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("standard".parse::<ElevatorKind>(), Ok(ElevatorKind::Standard));
        assert_eq!("HighSpeed".parse::<ElevatorKind>(), Ok(ElevatorKind::HighSpeed));
        assert_eq!(" GLASS ".parse::<ElevatorKind>(), Ok(ElevatorKind::Glass));
        assert_eq!("freight".parse::<ElevatorKind>(), Ok(ElevatorKind::Freight));
        assert_eq!(
            "unknown".parse::<ElevatorKind>(),
            Err(FleetError::UnknownElevatorKind("unknown".to_string()))
        );
    }

    #[test]
    fn test_status_rendering() {
        let mut elevator = setup_elevator(8, 3);
        elevator.add_passengers(2).unwrap();

        let line = elevator.status().to_string();

        assert_eq!(
            line,
            "Elevator 0 (Standard): Floor 3, Moving: false, Direction: Stationary, People On Board: 2, Capacity: 8"
        );
    }
}
