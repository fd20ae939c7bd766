// Domain layer: order models and ports. No transport or config concerns here.

pub mod model;
pub mod ports;
