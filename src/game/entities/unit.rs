use log::warn;

use crate::game::types::{GameItem, ItemKind, Position, Tile, WorldSize};

/// Create a new unit at `position`.
/// Returns `None` when the cell lies outside the world or already holds a live unit.
pub fn spawn_unit(
    size: WorldSize,
    units: &[GameItem],
    position: Position,
    tile: Tile,
) -> Option<GameItem> {
    if !size.contains(position) {
        warn!("[Spawn] Cannot place unit at ({}, {}): outside the world", position.x, position.y);
        return None;
    }

    if units.iter().any(|u| u.is_alive() && u.position == position) {
        warn!("[Spawn] Cannot place unit at ({}, {}): cell occupied", position.x, position.y);
        return None;
    }

    Some(GameItem::new(ItemKind::Unit, position, tile))
}
