// Matrix Rules
// Ordered rule tables for config classification, shard counts and runner selection

use crate::catalog::BuildDescriptor;
use crate::matrix::models::ConfigKind;

/// Shards for a build without an accelerator or explicit override
pub const DEFAULT_SHARDS: u32 = 2;

/// Shards for accelerator (CUDA/ROCm) builds without an explicit override
pub const ACCELERATED_SHARDS: u32 = 3;

/// Prefix shared by every runner label
pub const INSTANCE_PREFIX: &str = "lf.ephemeral.";

/// A predicate over a build paired with the outcome it selects.
///
/// Rule tables are evaluated in order; the first matching rule wins.
#[derive(Clone, Copy)]
pub struct Rule<T> {
    /// Short description, used in diagnostics and tests
    pub name: &'static str,
    pub matches: fn(&BuildDescriptor) -> bool,
    pub outcome: T,
}

/// Return the outcome of the first matching rule, or `fallback`
pub fn first_match<T: Copy>(rules: &[Rule<T>], build: &BuildDescriptor, fallback: T) -> T {
    rules
        .iter()
        .find(|rule| (rule.matches)(build))
        .map(|rule| rule.outcome)
        .unwrap_or(fallback)
}

pub static CONFIG_RULES: &[Rule<ConfigKind>] = &[
    Rule {
        name: "mobile flag",
        matches: |b| b.mobile,
        outcome: ConfigKind::Mobile,
    },
    Rule {
        name: "executorch id",
        matches: |b| b.id.contains("executorch"),
        outcome: ConfigKind::Executorch,
    },
    Rule {
        name: "no_ops flag",
        matches: |b| b.no_ops,
        outcome: ConfigKind::NoOps,
    },
    Rule {
        name: "accelerator",
        matches: |b| b.accelerator.is_present(),
        outcome: ConfigKind::Distributed,
    },
];

/// Runner labels, without [`INSTANCE_PREFIX`]
pub static INSTANCE_RULES: &[Rule<&'static str>] = &[
    Rule {
        name: "focal cuda12.6 gcc11 build",
        matches: |b| b.id.contains("linux-focal-cuda12.6-py3.10-gcc11") && !b.no_ops,
        outcome: "linux.g4dn.12xlarge.nvidia.gpu",
    },
    Rule {
        name: "rocm5.4 id",
        matches: |b| b.id.contains("rocm5.4"),
        outcome: "linux.g4dn.12xlarge.amd.gpu",
    },
    Rule {
        name: "windows runner",
        matches: |b| b.os.contains("windows"),
        outcome: "windows.g4dn.12xlarge",
    },
    Rule {
        name: "cuda accelerator",
        matches: |b| b.accelerator.is_cuda(),
        outcome: "linux.g4dn.12xlarge.nvidia.gpu",
    },
    Rule {
        name: "rocm compiler",
        matches: |b| b.compiler == "rocm",
        outcome: "linux.g4dn.12xlarge.amd.gpu",
    },
];

pub const DEFAULT_INSTANCE: &str = "linux.2xlarge";

pub fn classify_config(build: &BuildDescriptor) -> ConfigKind {
    first_match(CONFIG_RULES, build, ConfigKind::Default)
}

/// Number of test shards for a build; a zero override counts as unset
pub fn shard_count(build: &BuildDescriptor) -> u32 {
    match build.shard_count {
        Some(count) if count > 0 => count,
        _ if build.accelerator.is_present() || build.compiler == "rocm" => ACCELERATED_SHARDS,
        _ => DEFAULT_SHARDS,
    }
}

/// Full runner label, e.g. `lf.ephemeral.linux.2xlarge`
pub fn instance_label(build: &BuildDescriptor) -> String {
    format!(
        "{}{}",
        INSTANCE_PREFIX,
        first_match(INSTANCE_RULES, build, DEFAULT_INSTANCE)
    )
}
