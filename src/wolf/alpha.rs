//! Alpha wolf selection and abilities (spec §4.F). Grounded on
//! `original_source/_INDEX.md`'s dedicated `alpha_wolf.h`.

use crate::constants::ALPHA_AURA_RADIUS;
use crate::wolf::{PackController, Wolf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaAbility {
    RallyPack,
    CoordinatedStrike,
    Intimidate,
    CallReinforcements,
    BerserkRage,
}

const ABILITY_COOLDOWNS: [f32; 5] = [15.0, 12.0, 10.0, 20.0, 30.0];

fn composite_score(w: &Wolf) -> f32 {
    w.health * 0.4 + w.aggression * 0.3 + w.intelligence * 0.3
}

/// Re-selects the alpha each tick among eligible wolves (spec §4.F).
pub fn select_alpha(wolves: &[Wolf]) -> i32 {
    wolves
        .iter()
        .enumerate()
        .filter(|(_, w)| w.active && w.health > 0.8 && w.aggression > 0.6 && w.intelligence > 0.6)
        .max_by(|(_, a), (_, b)| composite_score(a).total_cmp(&composite_score(b)))
        .map(|(i, _)| i as i32)
        .unwrap_or(-1)
}

/// Grants +coordination to wolves within the alpha's aura radius.
pub fn apply_aura(wolves: &mut [Wolf], alpha_idx: i32) {
    let Some(alpha_idx) = usize::try_from(alpha_idx).ok() else { return };
    if alpha_idx >= wolves.len() {
        return;
    }
    let (ax, ay) = (wolves[alpha_idx].x, wolves[alpha_idx].y);
    for (i, w) in wolves.iter_mut().enumerate() {
        if i == alpha_idx || !w.active {
            continue;
        }
        let dx = w.x - ax;
        let dy = w.y - ay;
        if (dx * dx + dy * dy).sqrt() <= ALPHA_AURA_RADIUS {
            w.coordination = (w.coordination + 0.1).min(1.0);
        }
    }
}

/// Priority-ordered ability choice; returns the chosen ability and applies
/// its cooldown, or `None` if nothing is available.
pub fn choose_ability(
    controller: &mut PackController,
    alpha: &Wolf,
    player_pos: (f32, f32),
    pack_size: u32,
    now: f32,
) -> Option<AlphaAbility> {
    let dist_to_player = {
        let dx = alpha.x - player_pos.0;
        let dy = alpha.y - player_pos.1;
        (dx * dx + dy * dy).sqrt()
    };
    let candidates = [
        (AlphaAbility::CallReinforcements, 0, pack_size < 6),
        (AlphaAbility::Intimidate, 2, dist_to_player < 0.15),
        (AlphaAbility::CoordinatedStrike, 1, true),
        (AlphaAbility::RallyPack, 3, true),
        (AlphaAbility::BerserkRage, 4, alpha.health < 0.5),
    ];
    for (ability, cd_idx, eligible) in candidates {
        if eligible && now >= controller.alpha_ability_cooldowns[cd_idx] {
            controller.alpha_ability_cooldowns[cd_idx] = now + ABILITY_COOLDOWNS[cd_idx];
            return Some(ability);
        }
    }
    None
}

/// Intimidate reduces the player's stamina regen multiplier while the
/// alpha remains within 0.15 (spec §4.F).
pub fn intimidate_stamina_mult(in_range: bool) -> f32 {
    if in_range {
        0.3
    } else {
        1.0
    }
}

/// Upon alpha death, any living wolf may emit a single Mourning howl.
pub fn mourning_candidate(wolves: &[Wolf]) -> Option<usize> {
    wolves.iter().position(|w| w.active)
}
