// Domain layer: plain data and the catalog source port. No I/O here.

pub mod model;
pub mod ports;
