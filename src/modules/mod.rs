pub mod process;
pub mod rocket;
pub mod share;
pub mod system;
pub mod upload;
