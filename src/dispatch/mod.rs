pub mod planner;

pub use planner::*;
