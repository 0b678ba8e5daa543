//! Damage calculation
//!
//! A hit is a uniform roll; the enemy falls once its health reaches zero.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::entities::Entity;

/// Range of damage a single player hit can roll
pub const HIT_DAMAGE_RANGE: RangeInclusive<i32> = 2..=20;

/// Result of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt
    pub damage: i32,
    /// Defender health after the hit
    pub remaining_health: i32,
    /// Whether this hit killed the defender
    pub killed: bool,
}

/// Roll the damage of one hit
pub fn roll_damage(rng: &mut impl Rng) -> i32 {
    rng.gen_range(HIT_DAMAGE_RANGE)
}

/// Apply a rolled hit from `attacker` to `defender`.
///
/// The attacker remembers the damage as its last hit. A defender that drops
/// to zero health or below is marked dead; hitting an already dead defender
/// does nothing and reports no kill.
pub fn resolve_attack(attacker: &mut Entity, defender: &mut Entity, rng: &mut impl Rng) -> AttackResult {
    if !defender.alive {
        return AttackResult {
            damage: 0,
            remaining_health: defender.health,
            killed: false,
        };
    }

    let damage = roll_damage(rng);
    apply_damage(attacker, defender, damage)
}

/// Apply a known amount of damage
pub fn apply_damage(attacker: &mut Entity, defender: &mut Entity, damage: i32) -> AttackResult {
    attacker.damage = damage;
    defender.health -= damage;

    let killed = defender.health <= 0;
    if killed {
        defender.alive = false;
    }

    AttackResult {
        damage,
        remaining_health: defender.health,
        killed,
    }
}
