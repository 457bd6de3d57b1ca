#![allow(dead_code)]

mod database;
mod recording_handler;

pub use database::*;
pub use recording_handler::*;
