// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std, serde and the XML event types carried by parsed icons.

pub mod model;
pub mod ports;
