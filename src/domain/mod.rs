// Domain layer: upload jobs and the ports the runner depends on.

pub mod model;
pub mod ports;
