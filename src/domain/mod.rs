// Domain layer: compound schema, display types and ports. No HTTP or server types here.

pub mod model;
pub mod ports;
