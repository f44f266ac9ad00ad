//! Wolfskin Hollow - Simulation Core
//!
//! A deterministic, fixed-timestep simulation core for a top-down action
//! roguelike: `state(t) + input(t) -> state(t+1)`, safe to run in lockstep
//! across multiplayer peers. No wall-clock reads, no allocation-dependent
//! ordering, no floating-point platform intrinsics beyond `f32` core ops.

pub mod animation;
pub mod api;
pub mod constants;
pub mod grids;
pub mod math;
pub mod player;
pub mod rng;
pub mod run;
pub mod wolf;
pub mod world;

pub use api::SimWorld;
pub use world::World;
