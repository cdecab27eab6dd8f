// Domain layer: the values that flow through one session and the ports the engine depends on.

pub mod model;
pub mod ports;
