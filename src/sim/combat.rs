//! Melee combat: attack triggering, range checks and knockback

use super::rules::{CombatRules, HitPolicy};
use super::state::{GameEvent, Player};

/// Start an attack if the button is held and the cooldown has run out,
/// then count the cooldown down one step. Returns true if a swing started.
pub fn try_attack(player: &mut Player, attack: bool, combat: &CombatRules) -> bool {
    let started = attack && player.cooldown <= 0;
    if started {
        player.attacking = true;
        player.cooldown = combat.cooldown;
        player.attack_timer = combat.window.max(1);
        player.hit_this_swing.clear();
    }
    if player.cooldown > 0 {
        player.cooldown -= 1;
    }
    started
}

/// Hit range: close horizontally and overlapping vertically
pub fn in_range(attacker: &Player, defender: &Player, range: f32) -> bool {
    (attacker.pos.x - defender.pos.x).abs() < range
        && (attacker.pos.y - defender.pos.y).abs() < attacker.height()
}

/// Apply damage and knockback pushing the defender away from the attacker
pub fn apply_hit(attacker: &Player, defender: &mut Player, combat: &CombatRules) {
    defender.health -= combat.damage;
    defender.vel.x = if defender.pos.x > attacker.pos.x {
        combat.knockback
    } else {
        -combat.knockback
    };
    defender.vel.y = combat.knockback_lift;
}

/// Resolve every active attack against every other player, then advance
/// the attack windows.
pub fn resolve_attacks(players: &mut [Player], combat: &CombatRules, events: &mut Vec<GameEvent>) {
    for a in 0..players.len() {
        if !players[a].attacking {
            continue;
        }

        for d in 0..players.len() {
            if d == a {
                continue;
            }
            if combat.hit_policy == HitPolicy::OncePerSwing && players[a].hit_this_swing.contains(&d)
            {
                continue;
            }
            if !in_range(&players[a], &players[d], combat.range) {
                continue;
            }

            let attacker = players[a].clone();
            apply_hit(&attacker, &mut players[d], combat);
            players[a].hit_this_swing.push(d);
            log::debug!(
                "{} hit {} (health {})",
                attacker.name,
                players[d].name,
                players[d].health
            );
            events.push(GameEvent::Hit {
                attacker: a,
                defender: d,
            });
        }

        let attacker = &mut players[a];
        attacker.attack_timer = attacker.attack_timer.saturating_sub(1);
        attacker.attacking = attacker.attack_timer > 0;
        if !attacker.attacking {
            attacker.hit_this_swing.clear();
        }
    }
}
