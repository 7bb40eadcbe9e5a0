// Domain layer: check commands, run outcomes and the executor port.

pub mod model;
pub mod ports;
