//! Sound definitions and mappings
//!
//! Which sound each game event makes.

use std::path::Path;

use crate::game::GameEvent;

/// Sound event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Player stepped a tile
    Step,
    /// Step blocked by the world edge
    Bump,
    /// Player hit the enemy
    Hit,
    /// Enemy dies
    EnemyDeath,
    /// Chest appeared
    ChestOpen,
    /// Gold collected
    GoldPickup,
    /// Went through the gate
    ZoneChange,
}

impl SoundId {
    /// Every sound id
    pub const ALL: [SoundId; 7] = [
        SoundId::Step,
        SoundId::Bump,
        SoundId::Hit,
        SoundId::EnemyDeath,
        SoundId::ChestOpen,
        SoundId::GoldPickup,
        SoundId::ZoneChange,
    ];

    /// Get the file path for this sound
    pub fn file_path(&self) -> &'static str {
        match self {
            SoundId::Step => "assets/sounds/step.ogg",
            SoundId::Bump => "assets/sounds/bump.ogg",
            SoundId::Hit => "assets/sounds/hit.ogg",
            SoundId::EnemyDeath => "assets/sounds/enemy_death.ogg",
            SoundId::ChestOpen => "assets/sounds/chest_open.ogg",
            SoundId::GoldPickup => "assets/sounds/gold.ogg",
            SoundId::ZoneChange => "assets/sounds/gate.ogg",
        }
    }

    /// Get the default volume for this sound (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundId::Step => 0.3,
            SoundId::Bump => 0.4,
            SoundId::Hit => 0.6,
            SoundId::EnemyDeath | SoundId::ChestOpen => 0.7,
            SoundId::GoldPickup => 0.5,
            SoundId::ZoneChange => 0.8,
        }
    }

    /// Sound for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<SoundId> {
        match event {
            GameEvent::Moved { .. } => Some(SoundId::Step),
            GameEvent::MoveBlocked { .. } => Some(SoundId::Bump),
            GameEvent::ZoneChanged { .. } => Some(SoundId::ZoneChange),
            GameEvent::EnemyHit { .. } => Some(SoundId::Hit),
            GameEvent::EnemyDefeated { .. } => Some(SoundId::EnemyDeath),
            GameEvent::ChestSpawned { .. } => Some(SoundId::ChestOpen),
            GameEvent::LootCollected { .. } => Some(SoundId::GoldPickup),
        }
    }

    /// Check if the sound file exists
    pub fn exists(&self) -> bool {
        Path::new(self.file_path()).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Position;
    use crate::world::Zone;

    #[test]
    fn test_event_sounds() {
        assert_eq!(SoundId::for_event(&GameEvent::LootCollected { money: 5 }), Some(SoundId::GoldPickup));
        assert_eq!(
            SoundId::for_event(&GameEvent::ZoneChanged { zone: Zone::Dungeon }),
            Some(SoundId::ZoneChange)
        );
        assert_eq!(
            SoundId::for_event(&GameEvent::ChestSpawned { position: Position::new(8, 8), money: 20 }),
            Some(SoundId::ChestOpen)
        );
    }

    #[test]
    fn test_volumes_in_range() {
        for id in SoundId::ALL {
            assert!((0.0..=1.0).contains(&id.default_volume()));
            assert!(id.file_path().ends_with(".ogg"));
        }
    }
}
