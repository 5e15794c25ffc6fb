pub mod address;
pub mod config;
pub mod error;
pub mod inventory;
pub mod lookup;
pub mod tags;
pub mod util;
