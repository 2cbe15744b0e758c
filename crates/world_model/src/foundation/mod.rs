//! Foundation utilities shared by the world model

pub mod collections;
pub mod logging;
pub mod math;
