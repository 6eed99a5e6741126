// Domain layer: tracking models and ports (carrier / storefront interfaces).

pub mod model;
pub mod ports;
