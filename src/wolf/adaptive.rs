//! Adaptive difficulty (spec §4.F): tracks dodge/block/damage-avoidance
//! and kill rate, retargets global wolf difficulty tunables on a low-pass
//! blend. Grounded on `original_source/_INDEX.md`'s `adaptive_ai.h`.

use crate::constants::{ADAPTIVE_BLEND, ADAPTIVE_RETARGET_INTERVAL};
use crate::math::lerp;
use serde::{Deserialize, Serialize};

/// Runtime-mutable difficulty tunables (the `SimConfig`-style resource of
/// SPEC_FULL.md §B; everything else stays a `const`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub wolf_speed: f32,
    pub aggression: f32,
    pub intelligence: f32,
    pub coordination: f32,
    pub feint_rate: f32,
    pub attack_cooldown: f32,
    pub reaction_delay: f32,
    pub vision_range: f32,
    pub hearing_range: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        DifficultyConfig {
            wolf_speed: 1.0,
            aggression: 0.5,
            intelligence: 0.5,
            coordination: 0.5,
            feint_rate: 1.0,
            attack_cooldown: 1.0,
            reaction_delay: 1.0,
            vision_range: 1.0,
            hearing_range: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AdaptiveStats {
    pub dodges: u32,
    pub blocks: u32,
    pub hits_taken: u32,
    pub kills: u32,
    pub attacks_faced: u32,
    pub last_retarget: f32,
}

impl AdaptiveStats {
    pub fn record_dodge(&mut self) {
        self.dodges += 1;
        self.attacks_faced += 1;
    }
    pub fn record_block(&mut self) {
        self.blocks += 1;
        self.attacks_faced += 1;
    }
    pub fn record_hit_taken(&mut self) {
        self.hits_taken += 1;
        self.attacks_faced += 1;
    }
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn skill_score(&self) -> f32 {
        if self.attacks_faced == 0 {
            return 0.5;
        }
        let avoidance = (self.dodges + self.blocks) as f32 / self.attacks_faced as f32;
        let kill_factor = (self.kills as f32 / 10.0).min(1.0);
        (avoidance * 0.7 + kill_factor * 0.3).clamp(0.0, 1.0)
    }
}

/// Every `ADAPTIVE_RETARGET_INTERVAL` seconds, blends config toward a new
/// target derived from the skill score (spec §4.F).
pub fn maybe_retarget(config: &mut DifficultyConfig, stats: &mut AdaptiveStats, now: f32) -> bool {
    if now - stats.last_retarget < ADAPTIVE_RETARGET_INTERVAL {
        return false;
    }
    stats.last_retarget = now;
    let skill = stats.skill_score();

    let target = DifficultyConfig {
        wolf_speed: lerp(0.85, 1.2, skill),
        aggression: lerp(0.3, 0.8, skill),
        intelligence: lerp(0.3, 0.8, skill),
        coordination: lerp(0.3, 0.8, skill),
        feint_rate: lerp(0.7, 1.3, skill),
        attack_cooldown: lerp(1.2, 0.8, skill),
        reaction_delay: lerp(1.3, 0.7, skill),
        vision_range: lerp(0.9, 1.15, skill),
        hearing_range: lerp(0.9, 1.15, skill),
    };

    config.wolf_speed = lerp(config.wolf_speed, target.wolf_speed, ADAPTIVE_BLEND);
    config.aggression = lerp(config.aggression, target.aggression, ADAPTIVE_BLEND);
    config.intelligence = lerp(config.intelligence, target.intelligence, ADAPTIVE_BLEND);
    config.coordination = lerp(config.coordination, target.coordination, ADAPTIVE_BLEND);
    config.feint_rate = lerp(config.feint_rate, target.feint_rate, ADAPTIVE_BLEND);
    config.attack_cooldown = lerp(config.attack_cooldown, target.attack_cooldown, ADAPTIVE_BLEND);
    config.reaction_delay = lerp(config.reaction_delay, target.reaction_delay, ADAPTIVE_BLEND);
    config.vision_range = lerp(config.vision_range, target.vision_range, ADAPTIVE_BLEND);
    config.hearing_range = lerp(config.hearing_range, target.hearing_range, ADAPTIVE_BLEND);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retarget_respects_interval() {
        let mut config = DifficultyConfig::default();
        let mut stats = AdaptiveStats::default();
        assert!(!maybe_retarget(&mut config, &mut stats, 1.0));
        assert!(maybe_retarget(&mut config, &mut stats, 11.0));
    }

    #[test]
    fn skill_score_in_unit_range() {
        let mut stats = AdaptiveStats::default();
        stats.record_dodge();
        stats.record_hit_taken();
        stats.record_kill();
        assert!(stats.skill_score() >= 0.0 && stats.skill_score() <= 1.0);
    }
}
