// Domain layer: recipe value objects and the storage port.

pub mod model;
pub mod ports;
