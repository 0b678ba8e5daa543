//! Enemy entity creation

use rand::Rng;

use crate::world::Zone;
use super::Entity;

/// Grid cell the enemy guards
pub const ENEMY_TILE: (i32, i32) = (5, 5);
pub const ENEMY_HEALTH: i32 = 100;
/// Range of xp an enemy awards on death
pub const ENEMY_XP_RANGE: std::ops::RangeInclusive<i32> = 10..=100;

/// Spawn the dungeon's enemy with a rolled xp reward
pub fn spawn_enemy(rng: &mut impl Rng) -> Entity {
    Entity {
        health: ENEMY_HEALTH,
        xp: rng.gen_range(ENEMY_XP_RANGE),
        ..Entity::at_tile(ENEMY_TILE.0, ENEMY_TILE.1, Zone::Dungeon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_enemy_spawns_alive_in_dungeon() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let enemy = spawn_enemy(&mut rng);
            assert!(enemy.alive);
            assert_eq!(enemy.zone, Zone::Dungeon);
            assert_eq!(enemy.health, ENEMY_HEALTH);
            assert!(ENEMY_XP_RANGE.contains(&enemy.xp));
        }
    }
}
