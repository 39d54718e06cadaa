use crate::catalog::{BuildDescriptor, Text};

use serde::{Deserialize, Serialize};

use std::fmt;

/// Test configuration label, derived from a build's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKind {
    Mobile,
    Executorch,
    NoOps,
    Distributed,
    Default,
}

impl ConfigKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKind::Mobile => "mobile",
            ConfigKind::Executorch => "executorch",
            ConfigKind::NoOps => "no_ops",
            ConfigKind::Distributed => "distributed",
            ConfigKind::Default => "default",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shard of a build's test suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestShardConfig {
    pub os: Text,
    pub compiler: Text,
    pub config: ConfigKind,
    /// 1-based shard index
    pub shard: u32,
    pub job_name: String,
}

/// A catalog build plus its computed job name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    #[serde(flatten)]
    pub descriptor: BuildDescriptor,
    pub job_name: String,
}

/// One element of the emitted matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub build: BuildRecord,
    pub test: Vec<TestShardConfig>,
}
