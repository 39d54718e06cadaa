use serde::{Deserialize, Serialize};

use std::borrow::Cow;
use std::fmt;

/// String storage for catalog records.
///
/// Catalog entries borrow `'static` literals; records parsed back from JSON
/// own their data.
pub type Text = Cow<'static, str>;

/// Wrap a string literal for use in a `static` catalog entry
pub const fn text(s: &'static str) -> Text {
    Cow::Borrowed(s)
}

/// Pipeline trigger category a build belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Runs on every pull request
    Pull,
    /// Runs after merge to the main branch
    Trunk,
    /// Runs on a schedule
    Periodic,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Pull, Group::Trunk, Group::Periodic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Pull => "pull",
            Group::Trunk => "trunk",
            Group::Periodic => "periodic",
        }
    }

    /// Group spelled exactly as `name`, matching the generator's filter.
    ///
    /// Unlike `FromStr` this is case-sensitive.
    pub fn lookup(name: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|group| group.as_str() == name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pull" => Ok(Group::Pull),
            "trunk" => Ok(Group::Trunk),
            "periodic" => Ok(Group::Periodic),
            _ => Err(format!(
                "Unknown group '{}'. Valid groups: pull, trunk, periodic",
                s
            )),
        }
    }
}

/// GPU toolkit a build targets.
///
/// On the wire this keeps the catalog's legacy shape: `cuda` is always
/// present (`false` or a version string) and `rocm` only for ROCm builds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "AcceleratorFields", into = "AcceleratorFields")]
pub enum Accelerator {
    /// CPU-only build
    #[default]
    None,
    /// CUDA toolkit version, e.g. `12.6`
    Cuda(Text),
    /// ROCm release, e.g. `5.4`
    Rocm(Text),
}

impl Accelerator {
    pub fn is_present(&self) -> bool {
        !matches!(self, Accelerator::None)
    }

    pub fn is_cuda(&self) -> bool {
        matches!(self, Accelerator::Cuda(_))
    }

    pub fn is_rocm(&self) -> bool {
        matches!(self, Accelerator::Rocm(_))
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Accelerator::None => None,
            Accelerator::Cuda(v) | Accelerator::Rocm(v) => Some(v),
        }
    }

    /// Job name token, e.g. `cuda12.6` or `rocm5.4`
    pub fn token(&self) -> Option<String> {
        match self {
            Accelerator::None => None,
            Accelerator::Cuda(v) => Some(format!("cuda{}", v)),
            Accelerator::Rocm(v) => Some(format!("rocm{}", v)),
        }
    }
}

/// Serialized form of [`Accelerator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AcceleratorFields {
    #[serde(default)]
    cuda: CudaField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rocm: Option<Text>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CudaField {
    Flag(bool),
    Version(Text),
}

impl Default for CudaField {
    fn default() -> Self {
        CudaField::Flag(false)
    }
}

impl TryFrom<AcceleratorFields> for Accelerator {
    type Error = String;

    fn try_from(fields: AcceleratorFields) -> Result<Self, Self::Error> {
        match (fields.cuda, fields.rocm) {
            (CudaField::Flag(false), None) => Ok(Accelerator::None),
            (CudaField::Flag(false), Some(rocm)) => Ok(Accelerator::Rocm(rocm)),
            (CudaField::Version(cuda), None) => Ok(Accelerator::Cuda(cuda)),
            (CudaField::Flag(true), _) => {
                Err("'cuda' must be false or a CUDA version string".to_string())
            }
            (CudaField::Version(cuda), Some(rocm)) => Err(format!(
                "build cannot target both CUDA {} and ROCm {}",
                cuda, rocm
            )),
        }
    }
}

impl From<Accelerator> for AcceleratorFields {
    fn from(accelerator: Accelerator) -> Self {
        match accelerator {
            Accelerator::None => AcceleratorFields {
                cuda: CudaField::Flag(false),
                rocm: None,
            },
            Accelerator::Cuda(v) => AcceleratorFields {
                cuda: CudaField::Version(v),
                rocm: None,
            },
            Accelerator::Rocm(v) => AcceleratorFields {
                cuda: CudaField::Flag(false),
                rocm: Some(v),
            },
        }
    }
}

/// One CI build definition from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    /// Unique build identifier, e.g. `linux-jammy-py3_9-gcc11`
    pub id: Text,
    /// Runner image, e.g. `ubuntu-latest`
    pub os: Text,
    pub compiler: Text,
    pub python_version: Text,
    #[serde(flatten)]
    pub accelerator: Accelerator,
    #[serde(default, skip_serializing_if = "is_false")]
    pub mobile: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_ops: bool,
    pub group: Group,
    /// Explicit shard count; zero is treated as unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_build() -> BuildDescriptor {
        BuildDescriptor {
            id: text("linux-jammy-py3_9-gcc11"),
            os: text("ubuntu-latest"),
            compiler: text("gcc11"),
            python_version: text("3.9"),
            accelerator: Accelerator::None,
            mobile: false,
            no_ops: false,
            group: Group::Pull,
            shard_count: None,
        }
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!("pull".parse::<Group>().unwrap(), Group::Pull);
        assert_eq!("TRUNK".parse::<Group>().unwrap(), Group::Trunk);
        assert_eq!("periodic".parse::<Group>().unwrap(), Group::Periodic);

        let err = "nightly".parse::<Group>().unwrap_err();
        assert!(err.contains("nightly"));
        assert!(err.contains("pull, trunk, periodic"));
    }

    #[test]
    fn test_group_lookup_is_exact() {
        assert_eq!(Group::lookup("trunk"), Some(Group::Trunk));
        assert_eq!(Group::lookup("PULL"), None);
        assert_eq!(Group::lookup(""), None);
        assert_eq!(Group::lookup("nightly"), None);
    }

    #[test]
    fn test_group_display_matches_serde() {
        for group in Group::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group));
        }
    }

    #[test]
    fn test_accelerator_tokens() {
        assert_eq!(Accelerator::None.token(), None);
        assert_eq!(
            Accelerator::Cuda(text("12.6")).token().as_deref(),
            Some("cuda12.6")
        );
        assert_eq!(
            Accelerator::Rocm(text("5.4")).token().as_deref(),
            Some("rocm5.4")
        );
        assert_eq!(Accelerator::Rocm(text("5.4")).version(), Some("5.4"));
        assert!(!Accelerator::None.is_present());
    }

    #[test]
    fn test_cpu_build_serializes_cuda_false() {
        let value = serde_json::to_value(cpu_build()).unwrap();
        assert_eq!(value["cuda"], serde_json::Value::Bool(false));
        assert!(value.get("rocm").is_none());
        assert!(value.get("mobile").is_none());
        assert!(value.get("no_ops").is_none());
        assert!(value.get("shard_count").is_none());
        assert_eq!(value["group"], "pull");
    }

    #[test]
    fn test_rocm_build_serializes_both_fields() {
        let build = BuildDescriptor {
            accelerator: Accelerator::Rocm(text("5.4")),
            shard_count: Some(4),
            ..cpu_build()
        };
        let value = serde_json::to_value(&build).unwrap();
        assert_eq!(value["cuda"], serde_json::Value::Bool(false));
        assert_eq!(value["rocm"], "5.4");
        assert_eq!(value["shard_count"], 4);
    }

    #[test]
    fn test_deserialize_catalog_shape() {
        let json = r#"{
            "id": "linux-focal-cuda12.6-py3.10-gcc11-no-ops",
            "os": "ubuntu-latest",
            "compiler": "gcc11",
            "python_version": "3.10",
            "cuda": "12.6",
            "no_ops": true,
            "group": "trunk"
        }"#;
        let build: BuildDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(build.accelerator, Accelerator::Cuda(text("12.6")));
        assert!(build.no_ops);
        assert!(!build.mobile);
        assert_eq!(build.group, Group::Trunk);
        assert_eq!(build.shard_count, None);
    }

    #[test]
    fn test_deserialize_missing_cuda_is_cpu() {
        let json = r#"{
            "id": "x",
            "os": "ubuntu-latest",
            "compiler": "gcc11",
            "python_version": "3.9",
            "group": "pull"
        }"#;
        let build: BuildDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(build.accelerator, Accelerator::None);
    }

    #[test]
    fn test_deserialize_rejects_conflicting_accelerators() {
        let json = r#"{
            "id": "x",
            "os": "ubuntu-latest",
            "compiler": "gcc11",
            "python_version": "3.9",
            "cuda": "12.6",
            "rocm": "5.4",
            "group": "pull"
        }"#;
        assert!(serde_json::from_str::<BuildDescriptor>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_cuda_true_without_version() {
        let json = r#"{
            "id": "x",
            "os": "ubuntu-latest",
            "compiler": "gcc11",
            "python_version": "3.9",
            "cuda": true,
            "group": "pull"
        }"#;
        assert!(serde_json::from_str::<BuildDescriptor>(json).is_err());
    }
}
