// Matrix Service Library
// Build catalog and CI test matrix generation

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod reporter;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};

// Re-export catalog types
pub use catalog::{Accelerator, BuildDescriptor, Group, ALL_BUILDS};

// Re-export matrix types
pub use matrix::{
    nested_matrix, BuildRecord, ConfigKind, MatrixEntry, MatrixGenerator, NestedJob,
    NestedMatrix, TestShardConfig,
};

// Re-export reporter types
pub use reporter::{MatrixReporter, OutputFormat};
