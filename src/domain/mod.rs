// Domain layer: ports (interfaces) the core depends on.

pub mod ports;
