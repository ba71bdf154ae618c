//! Chart-ready series, declarative options and the services producing them.

pub mod options;
pub mod services;
pub mod value_objects;

pub use options::*;
pub use services::*;
pub use value_objects::*;
