//! Frame resolution steps
//!
//! The update step is an ordered list of resolvers run over one `FrameIntent`.
//! A resolver that uses up the frame's action (an attack, a committed step)
//! reports `Consumed`; later resolvers see that through `FrameContext`.

use crate::combat::resolve_attack;
use crate::entities::{drop_chest, Position};
use super::event::GameEvent;
use super::intent::{Direction, FrameIntent};
use super::message::MessageCategory;
use super::state::Game;

/// What a resolver did with the frame's action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing consumed; later steps run as normal
    Continue,
    /// The frame's action was used up
    Consumed,
}

/// Per-frame scratch state shared by the resolvers
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    /// In-bounds position one tile away in the requested direction
    pub candidate: Option<Position>,
    /// Direction that was requested but would have left the grid
    pub blocked: Option<Direction>,
    /// Set once a step reports `Consumed`
    pub action_consumed: bool,
    pub events: Vec<GameEvent>,
}

impl FrameContext {
    /// Work out the candidate position for this frame's movement request
    pub fn new(game: &Game, intent: &FrameIntent) -> Self {
        let mut ctx = Self::default();
        if let Some(direction) = intent.movement {
            let (dx, dy) = direction.delta();
            let candidate = game.player().position.offset_tiles(dx, dy);
            if game.active_grid().contains_pixel(candidate.x, candidate.y) {
                ctx.candidate = Some(candidate);
            } else {
                ctx.blocked = Some(direction);
            }
        }
        ctx
    }
}

/// A resolver step
pub type Step = fn(&mut Game, &FrameIntent, &mut FrameContext) -> StepOutcome;

/// Resolvers in the order they run every frame
pub const PIPELINE: [(&str, Step); 4] = [
    ("zone_transition", zone_transition),
    ("combat", combat),
    ("movement", movement),
    ("loot", loot),
];

/// Interact on the gate flips the player between overworld and dungeon
pub fn zone_transition(game: &mut Game, intent: &FrameIntent, ctx: &mut FrameContext) -> StepOutcome {
    if !intent.interact || !game.player.is_at(game.gate.position) {
        return StepOutcome::Continue;
    }

    game.player.zone = game.player.zone.toggled();
    let zone = game.player.zone;
    log::info!("Player entered the {}", zone.name());
    game.messages.push(format!("You enter the {}.", zone.name()), MessageCategory::Travel);
    ctx.events.push(GameEvent::ZoneChanged { zone });

    StepOutcome::Continue
}

/// Stepping onto the living enemy attacks it instead of moving
pub fn combat(game: &mut Game, _intent: &FrameIntent, ctx: &mut FrameContext) -> StepOutcome {
    let Some(candidate) = ctx.candidate else {
        return StepOutcome::Continue;
    };
    if game.player.zone != game.enemy.zone || !game.enemy.alive || !game.enemy.is_at(candidate) {
        return StepOutcome::Continue;
    }

    let result = resolve_attack(&mut game.player, &mut game.enemy, &mut game.rng);
    log::debug!("Player hit enemy for {} ({} left)", result.damage, result.remaining_health);
    game.messages.push(
        format!("You hit the enemy for {} damage.", result.damage),
        MessageCategory::Combat,
    );
    ctx.events.push(GameEvent::EnemyHit {
        damage: result.damage,
        remaining_health: result.remaining_health,
    });

    if result.killed {
        let xp = game.enemy.xp;
        game.player.xp += xp;
        drop_chest(&mut game.chest, &game.enemy, &mut game.rng);

        log::info!("Enemy defeated, +{} xp, chest holds {} gold", xp, game.chest.money);
        game.messages.push(format!("The enemy falls. You gain {} xp.", xp), MessageCategory::Combat);
        ctx.events.push(GameEvent::EnemyDefeated { xp });
        ctx.events.push(GameEvent::ChestSpawned {
            position: game.chest.position,
            money: game.chest.money,
        });
    }

    StepOutcome::Consumed
}

/// Commit the candidate step unless something already used the action
pub fn movement(game: &mut Game, _intent: &FrameIntent, ctx: &mut FrameContext) -> StepOutcome {
    if ctx.action_consumed {
        return StepOutcome::Continue;
    }

    if let Some(direction) = ctx.blocked {
        log::debug!("Move {:?} blocked at {:?}", direction, game.player.position);
        ctx.events.push(GameEvent::MoveBlocked { direction });
        return StepOutcome::Continue;
    }

    match ctx.candidate {
        Some(to) => {
            let from = game.player.position;
            game.player.position = to;
            ctx.events.push(GameEvent::Moved { from, to });
            StepOutcome::Consumed
        }
        None => StepOutcome::Continue,
    }
}

/// Pickup on the chest once the enemy is dead empties it into the player's purse
pub fn loot(game: &mut Game, intent: &FrameIntent, ctx: &mut FrameContext) -> StepOutcome {
    if !intent.pickup
        || game.enemy.alive
        || !game.chest.is_active_in(game.player.zone)
        || !game.player.is_at(game.chest.position)
    {
        return StepOutcome::Continue;
    }

    let money = game.chest.money;
    game.chest.alive = false;
    game.player.money += money;

    log::info!("Looted chest for {} gold", money);
    game.messages.push(format!("You found {} gold.", money), MessageCategory::Loot);
    ctx.events.push(GameEvent::LootCollected { money });

    StepOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Zone;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["zone_transition", "combat", "movement", "loot"]);
    }

    #[test]
    fn test_context_blocks_off_grid_step() {
        let mut game = Game::seeded(1);
        game.player.position = Position::from_tile(0, 4);
        let ctx = FrameContext::new(&game, &FrameIntent::step(Direction::Left));
        assert_eq!(ctx.candidate, None);
        assert_eq!(ctx.blocked, Some(Direction::Left));
    }

    #[test]
    fn test_movement_skips_when_consumed() {
        let mut game = Game::seeded(1);
        let start = game.player.position;
        let intent = FrameIntent::step(Direction::Right);
        let mut ctx = FrameContext::new(&game, &intent);
        ctx.action_consumed = true;

        assert_eq!(movement(&mut game, &intent, &mut ctx), StepOutcome::Continue);
        assert_eq!(game.player.position, start);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn test_combat_ignores_enemy_in_other_zone() {
        let mut game = Game::seeded(1);
        game.player.zone = Zone::Overworld;
        game.player.position = game.enemy.position.offset_tiles(-1, 0);
        let intent = FrameIntent::step(Direction::Right);
        let mut ctx = FrameContext::new(&game, &intent);

        assert_eq!(combat(&mut game, &intent, &mut ctx), StepOutcome::Continue);
        assert_eq!(game.enemy.health, 100);
    }

    #[test]
    fn test_loot_requires_matching_zone() {
        let mut game = Game::seeded(1);
        game.enemy.alive = false;
        game.chest.alive = true;
        game.chest.money = 30;
        game.chest.position = game.player.position;
        game.chest.zone = Zone::Dungeon;
        game.player.zone = Zone::Overworld;
        let intent = FrameIntent::pickup();
        let mut ctx = FrameContext::new(&game, &intent);

        loot(&mut game, &intent, &mut ctx);
        assert!(game.chest.alive);
        assert_eq!(game.player.money, 1000);
    }
}
