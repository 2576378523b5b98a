pub mod algorithm;
pub mod component;
pub mod network;
pub mod pce;
pub mod utils;
