// Domain layer: the response model and the port the handler calls through.

pub mod model;
pub mod ports;
