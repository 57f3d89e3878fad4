// Domain layer: report model and the storage port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
