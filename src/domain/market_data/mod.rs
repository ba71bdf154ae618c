//! Market snapshot aggregate: raw points, derived indicators and their services.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
