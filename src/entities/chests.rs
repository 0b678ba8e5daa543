//! Chest entity creation
//!
//! The chest does not exist until the enemy dies; it then appears on the enemy's cell.

use rand::Rng;

use crate::world::Zone;
use super::Entity;

/// Range of gold a chest can hold
pub const CHEST_MONEY_RANGE: std::ops::RangeInclusive<i32> = 10..=100;

/// The chest before anything has dropped it
pub fn dormant_chest() -> Entity {
    Entity {
        alive: false,
        ..Entity::at_tile(0, 0, Zone::Dungeon)
    }
}

/// Roll the gold a freshly dropped chest holds
pub fn roll_chest_money(rng: &mut impl Rng) -> i32 {
    rng.gen_range(CHEST_MONEY_RANGE)
}

/// Drop the chest where `source` stands, in `source`'s zone
pub fn drop_chest(chest: &mut Entity, source: &Entity, rng: &mut impl Rng) {
    chest.position = source.position;
    chest.zone = source.zone;
    chest.money = roll_chest_money(rng);
    chest.alive = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dormant_chest_is_hidden() {
        let chest = dormant_chest();
        assert!(!chest.alive);
        assert!(!chest.is_active_in(Zone::Dungeon));
    }

    #[test]
    fn test_drop_chest_takes_source_cell_and_zone() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut chest = dormant_chest();
        let source = Entity::at_tile(6, 2, Zone::Overworld);

        drop_chest(&mut chest, &source, &mut rng);

        assert!(chest.alive);
        assert_eq!(chest.position, source.position);
        assert_eq!(chest.zone, Zone::Overworld);
        assert!(CHEST_MONEY_RANGE.contains(&chest.money));
    }
}
