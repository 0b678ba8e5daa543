//! Dungeon gate marker

use crate::world::Zone;
use super::Entity;

/// Grid cell of the gate, the same in both zones
pub const DUNGEON_GATE: (i32, i32) = (10, 10);

/// Spawn the gate. It belongs to every zone.
pub fn spawn_gate() -> Entity {
    Entity::at_tile(DUNGEON_GATE.0, DUNGEON_GATE.1, Zone::All)
}
