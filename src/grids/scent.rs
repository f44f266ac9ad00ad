//! Scent field: advect + decay + deposit (spec §4.G), 48×27 cells of
//! `f32 ∈ [0,1]` plus a scratch buffer, grounded on `TerrainGrid`'s
//! row-major cell layout and world/grid coordinate conversions.

use crate::constants::{SCENT_ADVECT_CELLS_PER_SEC, SCENT_DECAY_PER_SEC, SCENT_DEPOSIT_PER_SEC, SCENT_H, SCENT_W};
use crate::math::bilinear_sample;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScentField {
    cells: Vec<f32>,
    scratch: Vec<f32>,
}

impl Default for ScentField {
    fn default() -> Self {
        ScentField {
            cells: vec![0.0; SCENT_W * SCENT_H],
            scratch: vec![0.0; SCENT_W * SCENT_H],
        }
    }
}

impl ScentField {
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = 0.0);
    }

    pub fn world_to_cell(x: f32, y: f32) -> (f32, f32) {
        (x.clamp(0.0, 1.0) * (SCENT_W - 1) as f32, y.clamp(0.0, 1.0) * (SCENT_H - 1) as f32)
    }

    fn idx(gx: usize, gy: usize) -> usize {
        gy * SCENT_W + gx
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (gx, gy) = Self::world_to_cell(x, y);
        bilinear_sample(&self.cells, SCENT_W, SCENT_H, gx, gy)
    }

    /// Central-difference gradient at the wolf's world position, normalized.
    pub fn gradient_at(&self, x: f32, y: f32) -> (f32, f32) {
        let (gx, gy) = Self::world_to_cell(x, y);
        let eps = 1.0;
        let right = bilinear_sample(&self.cells, SCENT_W, SCENT_H, (gx + eps).min((SCENT_W - 1) as f32), gy);
        let left = bilinear_sample(&self.cells, SCENT_W, SCENT_H, (gx - eps).max(0.0), gy);
        let down = bilinear_sample(&self.cells, SCENT_W, SCENT_H, gx, (gy + eps).min((SCENT_H - 1) as f32));
        let up = bilinear_sample(&self.cells, SCENT_W, SCENT_H, gx, (gy - eps).max(0.0));
        crate::math::normalize(right - left, down - up)
    }

    /// Advects opposite wind, decays, and deposits at the player's cell.
    /// `wind` is a unit-ish vector in world units per second.
    pub fn step(&mut self, dt: f32, wind: (f32, f32), player_pos: (f32, f32)) {
        if dt <= 0.0 {
            return;
        }
        let shift_x = -wind.0 * SCENT_ADVECT_CELLS_PER_SEC * dt;
        let shift_y = -wind.1 * SCENT_ADVECT_CELLS_PER_SEC * dt;
        for gy in 0..SCENT_H {
            for gx in 0..SCENT_W {
                let sx = (gx as f32 + shift_x).clamp(0.0, (SCENT_W - 1) as f32);
                let sy = (gy as f32 + shift_y).clamp(0.0, (SCENT_H - 1) as f32);
                let sampled = bilinear_sample(&self.cells, SCENT_W, SCENT_H, sx, sy);
                self.scratch[Self::idx(gx, gy)] = (sampled * (1.0 - SCENT_DECAY_PER_SEC * dt).max(0.0)).clamp(0.0, 1.0);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);

        let (pgx, pgy) = Self::world_to_cell(player_pos.0, player_pos.1);
        let ix = (pgx.round() as usize).min(SCENT_W - 1);
        let iy = (pgy.round() as usize).min(SCENT_H - 1);
        let idx = Self::idx(ix, iy);
        self.cells[idx] = (self.cells[idx] + SCENT_DEPOSIT_PER_SEC * dt).min(1.0);
    }

    pub fn all_in_range(&self) -> bool {
        self.cells.iter().all(|&c| (0.0..=1.0).contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_does_not_mutate() {
        let mut field = ScentField::default();
        field.cells[10] = 0.5;
        let before = field.cells.clone();
        field.step(0.0, (0.0, 0.0), (0.5, 0.5));
        assert_eq!(before, field.cells);
    }

    #[test]
    fn cells_stay_in_unit_range() {
        let mut field = ScentField::default();
        for _ in 0..200 {
            field.step(0.1, (0.3, -0.1), (0.8, 0.8));
        }
        assert!(field.all_in_range());
    }

    #[test]
    fn gradient_points_toward_deposit_source() {
        let mut field = ScentField::default();
        for _ in 0..30 {
            field.step(0.1, (0.0, 0.0), (0.8, 0.8));
        }
        let (gx, gy) = field.gradient_at(0.2, 0.2);
        let (tx, ty) = crate::math::normalize(0.8 - 0.2, 0.8 - 0.2);
        let dot = crate::math::dot(gx, gy, tx, ty);
        assert!(dot > 0.0);
    }
}
