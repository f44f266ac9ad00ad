//! Disc obstacles, generated so BFS on the walkability grid reaches the
//! center from the spawn corner (spec §3, §4 `init_run`).

use crate::constants::{MAX_OBSTACLES, WALK_H, WALK_W};
use crate::rng::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// Builds up to [`MAX_OBSTACLES`] discs, rejecting any placement that would
/// block the BFS path from `spawn` to the grid center.
pub fn generate(rng: &mut Rng, spawn: (f32, f32)) -> (Vec<Obstacle>, u32) {
    let mut obstacles = Vec::with_capacity(MAX_OBSTACLES);
    let attempts = MAX_OBSTACLES * 4;
    for _ in 0..attempts {
        if obstacles.len() >= MAX_OBSTACLES {
            break;
        }
        let x = rng.range(0.1, 0.9);
        let y = rng.range(0.1, 0.9);
        let r = rng.range(0.02, 0.05);
        let candidate = Obstacle { x, y, r };
        let mut trial = obstacles.clone();
        trial.push(candidate);
        if is_walkable(&trial, spawn) {
            obstacles.push(candidate);
        }
    }
    let count = obstacles.len() as u32;
    (obstacles, count)
}

fn is_walkable(obstacles: &[Obstacle], spawn: (f32, f32)) -> bool {
    bfs_reaches_center(obstacles, spawn)
}

fn to_grid(x: f32, y: f32) -> (usize, usize) {
    let gx = ((x * WALK_W as f32) as usize).min(WALK_W - 1);
    let gy = ((y * WALK_H as f32) as usize).min(WALK_H - 1);
    (gx, gy)
}

fn cell_blocked(obstacles: &[Obstacle], gx: usize, gy: usize) -> bool {
    let cx = (gx as f32 + 0.5) / WALK_W as f32;
    let cy = (gy as f32 + 0.5) / WALK_H as f32;
    obstacles.iter().any(|o| {
        let dx = cx - o.x;
        let dy = cy - o.y;
        (dx * dx + dy * dy).sqrt() < o.r
    })
}

/// BFS-verifies walkable connectivity from `spawn` to the grid center cell
/// on the [`WALK_W`]×[`WALK_H`] grid (spec scenario 1).
pub fn bfs_reaches_center(obstacles: &[Obstacle], spawn: (f32, f32)) -> bool {
    let (sx, sy) = to_grid(spawn.0, spawn.1);
    let target = (WALK_W / 2, WALK_H / 2);
    if cell_blocked(obstacles, sx, sy) || cell_blocked(obstacles, target.0, target.1) {
        return false;
    }
    let mut visited = vec![false; WALK_W * WALK_H];
    let mut queue = VecDeque::new();
    visited[sy * WALK_W + sx] = true;
    queue.push_back((sx, sy));
    while let Some((x, y)) = queue.pop_front() {
        if (x, y) == target {
            return true;
        }
        let neighbors: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        for (dx, dy) in neighbors {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx as usize >= WALK_W || ny as usize >= WALK_H {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let idx = ny * WALK_W + nx;
            if visited[idx] || cell_blocked(obstacles, nx, ny) {
                continue;
            }
            visited[idx] = true;
            queue.push_back((nx, ny));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_obstacles_preserve_walkability() {
        let mut rng = Rng::new(1);
        let (obstacles, _) = generate(&mut rng, (0.06, 0.06));
        assert!(bfs_reaches_center(&obstacles, (0.06, 0.06)));
    }

    #[test]
    fn empty_obstacle_set_is_walkable() {
        assert!(bfs_reaches_center(&[], (0.06, 0.06)));
    }
}
