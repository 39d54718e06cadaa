// Build Catalog Module
// Build descriptors and the compiled-in catalog

pub mod builds;
pub mod models;

pub use builds::ALL_BUILDS;
pub use models::{text, Accelerator, BuildDescriptor, Group, Text};
