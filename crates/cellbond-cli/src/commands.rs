pub mod bonds;
pub mod energy;
pub mod report;
