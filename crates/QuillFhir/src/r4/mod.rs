//! FHIR R4 (4.0.1) data types and resources.

pub mod complex_types;
pub mod dynamic_value;
pub mod primitives;
pub mod resources;

pub use complex_types::*;
pub use dynamic_value::{DynamicValue, DynamicValueType};
pub use primitives::*;
pub use resources::*;
