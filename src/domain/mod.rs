// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde_json for the loosely typed export fields.

pub mod model;
pub mod ports;
