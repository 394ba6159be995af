//! Model types: sensor and aperture catalogs, parameter sets and metrics.

mod aperture;
mod params;
mod sensor;

pub use aperture::*;
pub use params::*;
pub use sensor::*;
