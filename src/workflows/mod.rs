pub mod audit;
pub mod billing;
