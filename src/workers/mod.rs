pub mod janitor;
pub mod simulator;
