pub mod analysis;
pub mod cycles;
pub mod health;
