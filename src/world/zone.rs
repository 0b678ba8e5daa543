//! Zones
//!
//! Which part of the world an entity lives in.

use serde::{Deserialize, Serialize};

/// A zone partitions which grid and which entities are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Present everywhere (the dungeon gate)
    All,
    Overworld,
    Dungeon,
}

impl Zone {
    /// The other side of the gate. `All` has no other side.
    pub fn toggled(self) -> Self {
        match self {
            Zone::Overworld => Zone::Dungeon,
            Zone::Dungeon => Zone::Overworld,
            Zone::All => Zone::All,
        }
    }

    /// Whether something in this zone shows up while the player is in `current`
    pub fn is_visible_in(self, current: Zone) -> bool {
        self == Zone::All || self == current
    }

    /// Get the zone name for display
    pub fn name(&self) -> &'static str {
        match self {
            Zone::All => "Everywhere",
            Zone::Overworld => "Overworld",
            Zone::Dungeon => "Dungeon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Zone::Overworld.toggled(), Zone::Dungeon);
        assert_eq!(Zone::Dungeon.toggled(), Zone::Overworld);
        assert_eq!(Zone::Overworld.toggled().toggled(), Zone::Overworld);
        assert_eq!(Zone::All.toggled(), Zone::All);
    }

    #[test]
    fn test_all_is_visible_everywhere() {
        assert!(Zone::All.is_visible_in(Zone::Overworld));
        assert!(Zone::All.is_visible_in(Zone::Dungeon));
        assert!(Zone::Dungeon.is_visible_in(Zone::Dungeon));
        assert!(!Zone::Dungeon.is_visible_in(Zone::Overworld));
    }
}
