pub mod analysis_log;
pub mod cycle_log;
