//! World grids (spec §3, §4.G): obstacles, scent field, danger zones,
//! hazards, sound pings, scent markers & territories.

pub mod danger;
pub mod hazards;
pub mod obstacles;
pub mod scent;
pub mod sound;
pub mod territory;

pub use danger::DangerZone;
pub use hazards::{Hazard, HazardType};
pub use obstacles::Obstacle;
pub use scent::ScentField;
pub use sound::SoundPing;
pub use territory::{ScentMarker, Territory};
