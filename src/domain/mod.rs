// Domain layer: experience and search models plus the ports adapters implement.

pub mod model;
pub mod ports;
pub mod search;
