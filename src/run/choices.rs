//! Choice pool & economy loop (spec §3, §4.H): static ~18-entry catalogue,
//! per-run taken-set, 3-slot offers with pity timers.

use crate::constants::MAX_TAKEN_CHOICES;
use crate::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceType {
    Passive,
    Defensive,
    Active,
    Offensive,
    Economy,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Bitfield tags; bit 0-3 reserved for elemental affinities so a single
/// `&` test detects conflicts with the player's current elemental tag.
pub type TagBits = u32;
pub const TAG_FIRE: TagBits = 1 << 0;
pub const TAG_ICE: TagBits = 1 << 1;
pub const TAG_POISON: TagBits = 1 << 2;
pub const TAG_LIGHTNING: TagBits = 1 << 3;
pub const ELEMENTAL_MASK: TagBits = TAG_FIRE | TAG_ICE | TAG_POISON | TAG_LIGHTNING;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: u32,
    pub choice_type: ChoiceType,
    pub rarity: Rarity,
    pub tags: TagBits,
    pub effect: EffectKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    StaminaCap(f32),
    Speed(f32),
    Damage(f32),
    Defense(f32),
    Lifesteal(f32),
    Treasure(f32),
}

/// The static ~18-choice catalogue (spec §3).
pub fn catalogue() -> Vec<Choice> {
    use ChoiceType::*;
    use EffectKind::*;
    use Rarity::*;
    vec![
        Choice { id: 0, choice_type: Passive, rarity: Common, tags: 0, effect: StaminaCap(0.1) },
        Choice { id: 1, choice_type: Passive, rarity: Uncommon, tags: 0, effect: Defense(0.08) },
        Choice { id: 2, choice_type: Passive, rarity: Rare, tags: 0, effect: Defense(0.15) },
        Choice { id: 3, choice_type: Defensive, rarity: Common, tags: 0, effect: Defense(0.1) },
        Choice { id: 4, choice_type: Defensive, rarity: Uncommon, tags: TAG_ICE, effect: Defense(0.12) },
        Choice { id: 5, choice_type: Defensive, rarity: Legendary, tags: 0, effect: Defense(0.3) },
        Choice { id: 6, choice_type: Active, rarity: Common, tags: 0, effect: Speed(0.1) },
        Choice { id: 7, choice_type: Active, rarity: Uncommon, tags: TAG_LIGHTNING, effect: Speed(0.15) },
        Choice { id: 8, choice_type: Active, rarity: Rare, tags: TAG_LIGHTNING, effect: Speed(0.25) },
        Choice { id: 9, choice_type: Offensive, rarity: Common, tags: 0, effect: Damage(0.1) },
        Choice { id: 10, choice_type: Offensive, rarity: Uncommon, tags: TAG_FIRE, effect: Damage(0.15) },
        Choice { id: 11, choice_type: Offensive, rarity: Rare, tags: TAG_FIRE, effect: Damage(0.25) },
        Choice { id: 12, choice_type: Offensive, rarity: Legendary, tags: TAG_POISON, effect: Damage(0.4) },
        Choice { id: 13, choice_type: Economy, rarity: Common, tags: 0, effect: Treasure(0.1) },
        Choice { id: 14, choice_type: Economy, rarity: Uncommon, tags: 0, effect: Treasure(0.2) },
        Choice { id: 15, choice_type: Economy, rarity: Rare, tags: 0, effect: Treasure(0.35) },
        Choice { id: 16, choice_type: Utility, rarity: Common, tags: 0, effect: Lifesteal(0.05) },
        Choice { id: 17, choice_type: Utility, rarity: Uncommon, tags: TAG_POISON, effect: Lifesteal(0.1) },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceState {
    pub taken: Vec<u32>,
    pub offers: [Option<u32>; 3],
    pub rounds_since_rare: u32,
    pub round_index: u32,
    pub seen_legendary: bool,
}

impl Default for ChoiceState {
    fn default() -> Self {
        ChoiceState { taken: Vec::new(), offers: [None, None, None], rounds_since_rare: 0, round_index: 0, seen_legendary: false }
    }
}

fn roll_rarity(rng: &mut Rng) -> Rarity {
    let r = rng.f01();
    if r < 0.50 {
        Rarity::Common
    } else if r < 0.80 {
        Rarity::Uncommon
    } else if r < 0.95 {
        Rarity::Rare
    } else {
        Rarity::Legendary
    }
}

fn slot_types(slot: usize) -> (ChoiceType, ChoiceType) {
    match slot {
        0 => (ChoiceType::Passive, ChoiceType::Defensive),
        1 => (ChoiceType::Active, ChoiceType::Offensive),
        _ => (ChoiceType::Economy, ChoiceType::Utility),
    }
}

/// Generates a fresh 3-slot offer, applying taken/tag-conflict filters and
/// pity rules (spec §4.H, §8 scenario 5).
pub fn generate_choices(state: &mut ChoiceState, player_elemental_tag: TagBits, rng: &mut Rng) {
    state.round_index += 1;
    let pool = catalogue();
    let mut offers = [None; 3];
    let mut best_rarity = Rarity::Common;

    for slot in 0..3 {
        let (type_a, type_b) = slot_types(slot);
        let rarity = roll_rarity(rng);
        let candidates: Vec<&Choice> = pool
            .iter()
            .filter(|c| {
                (c.choice_type == type_a || c.choice_type == type_b)
                    && c.rarity == rarity
                    && !state.taken.contains(&c.id)
                    && (c.tags & ELEMENTAL_MASK == 0 || c.tags & ELEMENTAL_MASK == player_elemental_tag)
            })
            .collect();
        let chosen = if candidates.is_empty() {
            pool.iter()
                .filter(|c| {
                    (c.choice_type == type_a || c.choice_type == type_b)
                        && !state.taken.contains(&c.id)
                        && (c.tags & ELEMENTAL_MASK == 0 || c.tags & ELEMENTAL_MASK == player_elemental_tag)
                })
                .min_by_key(|c| c.rarity as u8)
        } else {
            let idx = rng.below(candidates.len() as u32) as usize;
            Some(candidates[idx])
        };
        if let Some(c) = chosen {
            offers[slot] = Some(c.id);
            if (c.rarity as u8) > (best_rarity as u8) {
                best_rarity = c.rarity;
            }
        }
    }

    if matches!(best_rarity, Rarity::Rare | Rarity::Legendary) {
        state.rounds_since_rare = 0;
    } else {
        state.rounds_since_rare += 1;
    }
    if matches!(best_rarity, Rarity::Legendary) {
        state.seen_legendary = true;
    }

    // Pity: no rare for 3 rounds -> upgrade one slot to Rare.
    if state.rounds_since_rare >= 3
        && !matches!(best_rarity, Rarity::Rare | Rarity::Legendary)
        && upgrade_slot(&mut offers, &pool, Rarity::Rare, &state.taken, player_elemental_tag)
    {
        state.rounds_since_rare = 0;
    }
    // Pity: no legendary by round 10 -> upgrade one slot to Legendary.
    if state.round_index >= 10
        && !state.seen_legendary
        && upgrade_slot(&mut offers, &pool, Rarity::Legendary, &state.taken, player_elemental_tag)
    {
        state.seen_legendary = true;
    }

    state.offers = offers;
}

/// Returns `true` if a slot was actually upgraded; a catalogue with no
/// matching-type entry at `rarity` leaves the offers untouched (spec §4.H
/// pity, §8 scenario 5).
fn upgrade_slot(offers: &mut [Option<u32>; 3], pool: &[Choice], rarity: Rarity, taken: &[u32], player_elemental_tag: TagBits) -> bool {
    for slot_id in offers.iter_mut() {
        let Some(id) = *slot_id else { continue };
        let Some(current) = pool.iter().find(|c| c.id == id) else { continue };
        if let Some(upgrade) = pool.iter().find(|c| {
            c.choice_type == current.choice_type
                && c.rarity == rarity
                && !taken.contains(&c.id)
                && (c.tags & ELEMENTAL_MASK == 0 || c.tags & ELEMENTAL_MASK == player_elemental_tag)
        }) {
            *slot_id = Some(upgrade.id);
            return true;
        }
    }
    false
}

/// Commits offer slot or raw id; idempotent only before taken (spec §8).
pub fn commit_choice(state: &mut ChoiceState, id: u32) -> Option<Choice> {
    if state.taken.contains(&id) {
        return None;
    }
    if !state.offers.iter().any(|o| *o == Some(id)) {
        return None;
    }
    let pool = catalogue();
    let choice = pool.into_iter().find(|c| c.id == id)?;
    if state.taken.len() < MAX_TAKEN_CHOICES {
        state.taken.push(id);
    }
    state.offers = [None, None, None];
    Some(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pity_forces_rare_on_third_round() {
        let mut state = ChoiceState::default();
        // seed chosen to bias toward Common/Uncommon rolls
        let mut rng = Rng::new(2);
        generate_choices(&mut state, 0, &mut rng);
        generate_choices(&mut state, 0, &mut rng);
        generate_choices(&mut state, 0, &mut rng);
        let pool = catalogue();
        let has_rare_or_better = state.offers.iter().flatten().any(|id| {
            pool.iter().find(|c| c.id == *id).map(|c| matches!(c.rarity, Rarity::Rare | Rarity::Legendary)).unwrap_or(false)
        });
        assert!(has_rare_or_better || state.rounds_since_rare == 0);
    }

    #[test]
    fn recommit_after_taken_returns_none() {
        let mut state = ChoiceState::default();
        let mut rng = Rng::new(7);
        generate_choices(&mut state, 0, &mut rng);
        let id = state.offers.iter().flatten().next().copied().unwrap();
        assert!(commit_choice(&mut state, id).is_some());
        state.offers[0] = Some(id);
        assert!(commit_choice(&mut state, id).is_none());
    }
}
