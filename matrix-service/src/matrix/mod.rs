// Matrix Module
// Test config classification, job naming, shard expansion and nested matrices

pub mod generator;
pub mod models;
pub mod nested;
pub mod rules;

// Re-export key types
pub use generator::MatrixGenerator;
pub use models::{BuildRecord, ConfigKind, MatrixEntry, TestShardConfig};
pub use nested::{nested_matrix, NestedJob, NestedMatrix};
pub use rules::{Rule, CONFIG_RULES, INSTANCE_RULES};
