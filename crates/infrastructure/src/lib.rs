pub mod backend_handler;
pub mod database;
pub mod repositories;
pub mod socket;
pub mod suffix;
