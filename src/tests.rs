#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use uuid::Uuid;

    use crate::config::game::TileGameConfig;
    use crate::game::observer::{DestroyedUnitsLog, GameStateObserver};
    use crate::game::state::GameState;
    use crate::game::types::{GameItem, Position};

    /// Appends `(name, unit id)` to a shared journal on every notification.
    struct Recorder {
        name: &'static str,
        journal: Rc<RefCell<Vec<(&'static str, Uuid)>>>,
    }

    impl GameStateObserver for Recorder {
        fn unit_destroyed(&self, unit: &GameItem) {
            self.journal.borrow_mut().push((self.name, unit.id));
        }
    }

    fn recorder(name: &'static str, journal: &Rc<RefCell<Vec<(&'static str, Uuid)>>>) -> Rc<Recorder> {
        Rc::new(Recorder { name, journal: journal.clone() })
    }

    fn initial_unit(state: &GameState) -> Uuid {
        state.find_live_unit(Position::new(8, 9)).expect("initial unit").id
    }

    #[test]
    fn test_two_observers_notified_once_in_order() {
        let mut state = GameState::new(&TileGameConfig::default());
        let journal = Rc::new(RefCell::new(Vec::new()));
        let first = recorder("first", &journal);
        let second = recorder("second", &journal);
        state.add_observer(&first);
        state.add_observer(&second);

        let id = initial_unit(&state);
        state.destroy_unit(id).unwrap();

        assert_eq!(*journal.borrow(), vec![("first", id), ("second", id)]);
    }

    #[test]
    fn test_failed_destroy_notifies_nobody() {
        let mut state = GameState::new(&TileGameConfig::default());
        let journal = Rc::new(RefCell::new(Vec::new()));
        let observer = recorder("only", &journal);
        state.add_observer(&observer);

        let id = initial_unit(&state);
        state.destroy_unit(id).unwrap();
        assert!(state.destroy_unit(id).is_err());
        assert!(state.destroy_unit(Uuid::new_v4()).is_err());
        assert_eq!(journal.borrow().len(), 1);
    }

    #[test]
    fn test_removed_observer_is_not_notified() {
        let mut state = GameState::new(&TileGameConfig::default());
        let journal = Rc::new(RefCell::new(Vec::new()));
        let kept = recorder("kept", &journal);
        let removed = recorder("removed", &journal);
        state.add_observer(&kept);
        let removed_id = state.add_observer(&removed);

        assert!(state.remove_observer(removed_id));
        assert!(!state.remove_observer(removed_id));

        let id = initial_unit(&state);
        state.destroy_unit(id).unwrap();
        assert_eq!(*journal.borrow(), vec![("kept", id)]);
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let mut state = GameState::new(&TileGameConfig::default());
        let journal = Rc::new(RefCell::new(Vec::new()));
        let dropped = recorder("dropped", &journal);
        let log = Rc::new(DestroyedUnitsLog::new());
        state.add_observer(&dropped);
        state.add_observer(&log);
        assert_eq!(state.observer_count(), 2);

        drop(dropped);
        assert_eq!(state.observer_count(), 1);

        let id = initial_unit(&state);
        state.destroy_unit(id).unwrap();
        assert!(journal.borrow().is_empty());
        assert_eq!(log.destroyed(), vec![id]);
    }

    #[test]
    fn test_destroyed_unit_stays_in_state() {
        let mut state = GameState::new(&TileGameConfig::default());
        let id = initial_unit(&state);
        state.destroy_unit(id).unwrap();

        assert_eq!(state.units().len(), 1);
        assert_eq!(state.find_unit(Position::new(8, 9)).map(|u| u.id), Some(id));
        assert!(state.find_live_unit(Position::new(8, 9)).is_none());
    }

    #[test]
    fn test_positions_outside_world_never_match() {
        let state = GameState::new(&TileGameConfig::default());
        for position in [
            Position::new(-1, 9),
            Position::new(8, 10),
            Position::new(16, 0),
            Position::new(i32::MIN, i32::MAX),
        ] {
            assert!(!state.is_inside(position));
            assert!(state.find_unit(position).is_none());
        }
    }
}
