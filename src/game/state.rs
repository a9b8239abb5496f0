use std::rc::Rc;

use log::{debug, info};
use uuid::Uuid;

use crate::config::game::TileGameConfig;
use crate::error::GameError;
use crate::game::entities::spawn_unit;
use crate::game::grid::{TileGrid, generate_ground};
use crate::game::observer::{GameStateObserver, ObserverId, ObserverList};
use crate::game::types::{GameItem, ItemStatus, Position, WorldSize};

/// World grid, units and the observers watching them.
pub struct GameState {
    world_size: WorldSize,
    ground: TileGrid,
    units: Vec<GameItem>,
    observers: ObserverList,
}

impl GameState {
    /// Build a world with uniform ground and the configured starting unit.
    pub fn new(config: &TileGameConfig) -> Self {
        let world_size = WorldSize {
            width: config.world_width,
            height: config.world_height,
        };
        let ground = generate_ground(world_size, config.ground_tile);
        let units: Vec<GameItem> = spawn_unit(world_size, &[], config.unit_position, config.unit_tile)
            .into_iter()
            .collect();

        info!(
            "[GameState] New world {}x{} with {} unit(s)",
            world_size.width,
            world_size.height,
            units.len()
        );

        GameState {
            world_size,
            ground,
            units,
            observers: ObserverList::new(),
        }
    }

    /// Build a state from explicit parts. Rows of `ground` are padded or
    /// truncated to `world_size`.
    pub fn with_parts(world_size: WorldSize, mut ground: TileGrid, units: Vec<GameItem>) -> Self {
        ground.resize(world_size.height as usize, Vec::new());
        for row in ground.iter_mut() {
            row.resize(world_size.width as usize, None);
        }
        GameState {
            world_size,
            ground,
            units,
            observers: ObserverList::new(),
        }
    }

    pub fn world_size(&self) -> WorldSize {
        self.world_size
    }

    pub fn world_width(&self) -> u32 {
        self.world_size.width
    }

    pub fn world_height(&self) -> u32 {
        self.world_size.height
    }

    pub fn ground(&self) -> &TileGrid {
        &self.ground
    }

    pub fn units(&self) -> &[GameItem] {
        &self.units
    }

    /// Mutable access for moving or turning units. Status changes go through
    /// `destroy_unit` so observers hear about them.
    pub fn unit_mut(&mut self, id: Uuid) -> Option<&mut GameItem> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// True if `position` lies inside the world.
    pub fn is_inside(&self, position: Position) -> bool {
        self.world_size.contains(position)
    }

    /// First unit at `position`, dead or alive.
    pub fn find_unit(&self, position: Position) -> Option<&GameItem> {
        if !self.is_inside(position) {
            return None;
        }
        self.units.iter().find(|u| u.position == position)
    }

    /// First unit at `position`, if it is alive.
    pub fn find_live_unit(&self, position: Position) -> Option<&GameItem> {
        self.find_unit(position).filter(|u| u.is_alive())
    }

    pub fn add_observer<O: GameStateObserver + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.live_count()
    }

    /// Tell every observer, in registration order, that `unit` was destroyed.
    pub fn notify_unit_destroyed(&mut self, unit: &GameItem) {
        self.observers.for_each(|observer| observer.unit_destroyed(unit));
    }

    /// Mark a live unit dead and notify observers.
    pub fn destroy_unit(&mut self, id: Uuid) -> Result<(), GameError> {
        let unit = self
            .units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(GameError::UnitNotFound(id))?;
        if unit.status == ItemStatus::Dead {
            return Err(GameError::UnitAlreadyDead(id));
        }
        unit.status = ItemStatus::Dead;
        let snapshot = unit.clone();
        debug!("[GameState] Unit {} marked dead", id);

        self.notify_unit_destroyed(&snapshot);
        Ok(())
    }
}
