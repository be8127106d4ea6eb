/*
 * Unit tests for the floor and passenger registries
 *
 * Tests:
 * - test_floor_registry_initial_state
 * - test_update_waiting_passengers
 * - test_update_keeps_destinations_when_none
 * - test_update_unknown_floor
 * - test_update_rejects_unknown_destination
 * - test_passenger_ids_are_unique
 * - test_passengers_by_floor
 * - test_remove_passenger
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod registry_tests {
    use crate::registry::{FloorRegistry, InMemoryFloorRegistry};
    use crate::registry::{InMemoryPassengerRegistry, PassengerRegistry};
    use crate::shared::FleetError;

    #[test]
    fn test_floor_registry_initial_state() {
        // Arrange & Act
        let floors = InMemoryFloorRegistry::new(-1, 3);

        // Assert
        let numbers: Vec<i32> = floors.get_all_floors().iter().map(|f| f.floor_number).collect();
        assert_eq!(numbers, vec![-1, 0, 1, 2, 3]);
        assert!(floors.get_all_floors().iter().all(|f| f.waiting_passengers == 0));
        assert!(floors.get_floor(4).is_none());
    }

    #[test]
    fn test_update_waiting_passengers() {
        let mut floors = InMemoryFloorRegistry::new(0, 5);

        floors.update_waiting_passengers(2, 3, Some(vec![4, 5, 0])).unwrap();

        let floor = floors.get_floor(2).unwrap();
        assert_eq!(floor.waiting_passengers, 3);
        assert_eq!(floor.destination_floors, vec![4, 5, 0]);
    }

    #[test]
    fn test_update_keeps_destinations_when_none() {
        let mut floors = InMemoryFloorRegistry::new(0, 5);
        floors.update_waiting_passengers(1, 2, Some(vec![3, 4])).unwrap();

        floors.update_waiting_passengers(1, 5, None).unwrap();

        let floor = floors.get_floor(1).unwrap();
        assert_eq!(floor.waiting_passengers, 5);
        assert_eq!(floor.destination_floors, vec![3, 4]);
    }

    #[test]
    fn test_update_unknown_floor() {
        let mut floors = InMemoryFloorRegistry::new(0, 5);

        let result = floors.update_waiting_passengers(6, 1, None);

        assert_eq!(
            result,
            Err(FleetError::FloorOutOfRange {
                floor: 6,
                min_floor: 0,
                max_floor: 5
            })
        );
    }

    #[test]
    fn test_update_rejects_unknown_destination() {
        let mut floors = InMemoryFloorRegistry::new(0, 5);

        let result = floors.update_waiting_passengers(1, 2, Some(vec![3, 9]));

        assert!(matches!(result, Err(FleetError::FloorOutOfRange { floor: 9, .. })));
        assert_eq!(floors.get_floor(1).unwrap().waiting_passengers, 0);
    }

    #[test]
    fn test_passenger_ids_are_unique() {
        let mut passengers = InMemoryPassengerRegistry::new();

        let first = passengers.add_passenger(3);
        let second = passengers.add_passenger(3);
        passengers.remove_passenger(first);
        let third = passengers.add_passenger(4);

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn test_passengers_by_floor() {
        // Arrange
        let mut passengers = InMemoryPassengerRegistry::new();
        passengers.add_passenger(3);
        passengers.add_passenger(5);
        passengers.add_passenger(3);

        // Act
        let to_three = passengers.get_passengers_by_floor(3);
        let removed = passengers.remove_passengers_by_floor(3);

        // Assert
        assert_eq!(to_three.len(), 2);
        assert!(to_three.iter().all(|p| p.destination_floor == 3));
        assert_eq!(removed, 2);
        assert_eq!(passengers.get_all_passengers().len(), 1);
        assert_eq!(passengers.get_all_passengers()[0].destination_floor, 5);
    }

    #[test]
    fn test_remove_passenger() {
        let mut passengers = InMemoryPassengerRegistry::new();
        let id = passengers.add_passenger(2);

        assert!(passengers.remove_passenger(id));
        assert!(!passengers.remove_passenger(id));
        assert!(passengers.get_all_passengers().is_empty());
    }
}
