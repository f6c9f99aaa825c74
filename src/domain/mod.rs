// Domain layer: option values, the marker contract and the bundled marker type.

pub mod marker;
pub mod model;
pub mod ports;
