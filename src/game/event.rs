//! Game events
//!
//! What the update step did, reported back to the frontend (sound, effects).

use crate::entities::Position;
use crate::world::Zone;
use super::intent::Direction;

/// Something that happened during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player stepped one tile
    Moved { from: Position, to: Position },
    /// The step would have left the grid
    MoveBlocked { direction: Direction },
    /// The player went through the gate
    ZoneChanged { zone: Zone },
    /// The player hit the enemy
    EnemyHit { damage: i32, remaining_health: i32 },
    /// The enemy died and awarded xp
    EnemyDefeated { xp: i32 },
    /// A chest dropped where the enemy died
    ChestSpawned { position: Position, money: i32 },
    /// The player emptied the chest
    LootCollected { money: i32 },
}
