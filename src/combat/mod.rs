//! Combat system
//!
//! Hit rolls and death resolution.

pub mod damage;

pub use damage::{AttackResult, resolve_attack, roll_damage, HIT_DAMAGE_RANGE};
