//! CashOut phase (spec §4.H): shop, forge, heal economy. Draw order for
//! the Mystery effect follows DESIGN.md decision 3 (power roll first).

use crate::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopItemType {
    Weapon,
    Armor,
    Consumable,
    Blessing,
    Mystery,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub kind: ShopItemType,
    pub power: f32,
    pub cost_gold: u32,
    pub cost_essence: u32,
    pub mystery_roll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForgeOption {
    Sharpen,
    Reinforce,
    Enchant,
    Reroll,
}

impl ForgeOption {
    pub fn success_chance(self) -> f32 {
        match self {
            ForgeOption::Sharpen => 0.8,
            ForgeOption::Reinforce => 0.85,
            ForgeOption::Enchant => 0.7,
            ForgeOption::Reroll => 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashOutState {
    pub gold: u32,
    pub essence: u32,
    pub shop_items: Vec<ShopItem>,
    pub heal_gold_cost: u32,
    pub heal_essence_cost: u32,
}

impl Default for CashOutState {
    fn default() -> Self {
        CashOutState { gold: 0, essence: 0, shop_items: Vec::new(), heal_gold_cost: 50, heal_essence_cost: 5 }
    }
}

fn weighted_item_type(rng: &mut Rng) -> ShopItemType {
    let r = rng.f01();
    if r < 0.30 {
        ShopItemType::Weapon
    } else if r < 0.55 {
        ShopItemType::Armor
    } else if r < 0.75 {
        ShopItemType::Consumable
    } else if r < 0.90 {
        ShopItemType::Blessing
    } else {
        ShopItemType::Mystery
    }
}

pub fn generate_shop(state: &mut CashOutState, rng: &mut Rng) {
    let count = 3 + rng.below(3);
    state.shop_items.clear();
    for _ in 0..count {
        let kind = weighted_item_type(rng);
        // Power rolled first, then (if Mystery) the Mystery-specific roll,
        // matching the spec's fixed draw order for replay determinism.
        let power = rng.range(0.3, 1.0);
        let mystery_roll = if matches!(kind, ShopItemType::Mystery) { rng.f01() } else { 0.0 };
        let cost_gold = (20.0 + power * 80.0) as u32;
        let cost_essence = (power * 10.0) as u32;
        state.shop_items.push(ShopItem { kind, power, cost_gold, cost_essence, mystery_roll });
    }
}

pub fn buy_item(state: &mut CashOutState, index: usize) -> Option<ShopItem> {
    let item = *state.shop_items.get(index)?;
    if state.gold < item.cost_gold || state.essence < item.cost_essence {
        return None;
    }
    state.gold -= item.cost_gold;
    state.essence -= item.cost_essence;
    state.shop_items.remove(index);
    Some(item)
}

pub fn buy_heal(state: &mut CashOutState) -> bool {
    if state.gold < state.heal_gold_cost || state.essence < state.heal_essence_cost {
        return false;
    }
    state.gold -= state.heal_gold_cost;
    state.essence -= state.heal_essence_cost;
    state.heal_gold_cost = (state.heal_gold_cost as f32 * 1.5) as u32;
    state.heal_essence_cost = (state.heal_essence_cost as f32 * 1.3) as u32;
    true
}

pub fn reroll_shop(state: &mut CashOutState, rng: &mut Rng) -> bool {
    generate_shop(state, rng);
    true
}

pub fn use_forge_option(option: ForgeOption, rng: &mut Rng) -> bool {
    rng.f01() < option.success_chance()
}

pub fn should_exit(state: &CashOutState) -> bool {
    state.gold < 20 && state.essence < 3
}

/// Wolf-kill gold/essence reward (spec §4.H).
pub fn kill_reward(risk_multiplier: f32, elite_active: bool, rng: &mut Rng) -> (f32, f32) {
    let gold = (10.0 + rng.f01() * 5.0) * risk_multiplier;
    let essence = if elite_active { 2.0 + rng.f01() * 2.0 } else { 0.0 };
    (gold, essence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_cost_scales_each_use() {
        let mut state = CashOutState { gold: 10_000, essence: 100, ..Default::default() };
        let first_gold_cost = state.heal_gold_cost;
        assert!(buy_heal(&mut state));
        assert!(state.heal_gold_cost > first_gold_cost);
    }

    #[test]
    fn exit_threshold() {
        let state = CashOutState { gold: 10, essence: 2, ..Default::default() };
        assert!(should_exit(&state));
    }
}
