// Matrix Generator
// Selects builds from the catalog and derives job names and test shards

use crate::catalog::{BuildDescriptor, ALL_BUILDS};
use crate::matrix::models::{BuildRecord, ConfigKind, MatrixEntry, TestShardConfig};
use crate::matrix::rules;

/// Generates build/test matrices from a build catalog
#[derive(Debug, Clone, Copy)]
pub struct MatrixGenerator<'a> {
    catalog: &'a [BuildDescriptor],
}

impl MatrixGenerator<'static> {
    /// Generator over the compiled-in catalog
    pub fn new() -> Self {
        Self {
            catalog: ALL_BUILDS,
        }
    }
}

impl Default for MatrixGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MatrixGenerator<'a> {
    pub fn with_catalog(catalog: &'a [BuildDescriptor]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [BuildDescriptor] {
        self.catalog
    }

    /// Builds whose group equals `group`, or the whole catalog when the
    /// group is absent or empty.
    ///
    /// Unknown group names select nothing rather than failing.
    pub fn select_builds(&self, group: Option<&str>) -> Vec<&'a BuildDescriptor> {
        match group.filter(|group| !group.is_empty()) {
            None => self.catalog.iter().collect(),
            Some(group) => self
                .catalog
                .iter()
                .filter(|build| build.group.as_str() == group)
                .collect(),
        }
    }

    pub fn classify_config(&self, build: &BuildDescriptor) -> ConfigKind {
        rules::classify_config(build)
    }

    pub fn shard_count(&self, build: &BuildDescriptor) -> u32 {
        rules::shard_count(build)
    }

    /// Build job name: platform, distro, accelerator, python and compiler
    /// tokens joined with hyphens, skipping empty tokens.
    pub fn build_job_name(&self, build: &BuildDescriptor) -> String {
        let platform = if build.os.contains("windows") {
            "win"
        } else if build.os.contains("macos") {
            "macos"
        } else {
            "linux"
        };

        let distro = ["jammy", "focal"]
            .into_iter()
            .find(|distro| build.id.contains(distro));

        let mut tokens = vec![platform.to_string()];
        tokens.extend(distro.map(str::to_string));
        tokens.extend(build.accelerator.token());
        tokens.push(format!("py{}", build.python_version));
        tokens.push(build.compiler.to_string());

        tokens
            .into_iter()
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Test job name, e.g. `test (default, 1, 2, lf.ephemeral.linux.2xlarge)`
    pub fn test_job_name(&self, build: &BuildDescriptor, shard: u32) -> String {
        format!(
            "test ({}, {}, {}, {})",
            self.classify_config(build),
            shard,
            self.shard_count(build),
            rules::instance_label(build)
        )
    }

    /// One shard config per index in `1..=shard_count`
    pub fn test_matrix(&self, build: &BuildDescriptor) -> Vec<TestShardConfig> {
        let config = self.classify_config(build);
        (1..=self.shard_count(build))
            .map(|shard| TestShardConfig {
                os: build.os.clone(),
                compiler: build.compiler.clone(),
                config,
                shard,
                job_name: self.test_job_name(build, shard),
            })
            .collect()
    }

    /// Generate the matrix for `group`, preserving catalog order
    pub fn generate_matrix(&self, group: Option<&str>) -> Vec<MatrixEntry> {
        self.select_builds(group)
            .into_iter()
            .map(|build| MatrixEntry {
                build: BuildRecord {
                    descriptor: build.clone(),
                    job_name: self.build_job_name(build),
                },
                test: self.test_matrix(build),
            })
            .collect()
    }
}
