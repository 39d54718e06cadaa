// Build Catalog
// The fixed, ordered list of builds the CI pipeline knows about

use super::models::{text, Accelerator, BuildDescriptor, Group};

/// Every build the pipeline can run, in emission order.
pub static ALL_BUILDS: &[BuildDescriptor] = &[
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
    },
    BuildDescriptor {
        id: text("linux-jammy-py3-clang12-mobile"),
        os: text("ubuntu-latest"),
        compiler: text("clang12"),
        python_version: text("3.9"),
        accelerator: Accelerator::None,
        mobile: true,
        no_ops: false,
        group: Group::Pull,
        shard_count: None,
    },
    BuildDescriptor {
        id: text("linux-jammy-py3-clang12-executorch"),
        os: text("ubuntu-latest"),
        compiler: text("clang12"),
        python_version: text("3.9"),
        accelerator: Accelerator::None,
        mobile: false,
        no_ops: false,
        group: Group::Pull,
        shard_count: None,
    },
    BuildDescriptor {
        id: text("linux-focal-cuda12.6-py3.10-gcc11"),
        os: text("ubuntu-latest"),
        compiler: text("gcc11"),
        python_version: text("3.10"),
        accelerator: Accelerator::Cuda(text("12.6")),
        mobile: false,
        no_ops: false,
        group: Group::Pull,
        shard_count: Some(5),
    },
    BuildDescriptor {
        id: text("linux-focal-cuda12.6-py3.10-gcc11-no-ops"),
        os: text("ubuntu-latest"),
        compiler: text("gcc11"),
        python_version: text("3.10"),
        accelerator: Accelerator::Cuda(text("12.6")),
        mobile: false,
        no_ops: true,
        group: Group::Trunk,
        shard_count: None,
    },
    BuildDescriptor {
        id: text("win-vs2022-cuda12.6-py3"),
        os: text("windows-latest"),
        compiler: text("msvc2022"),
        python_version: text("3.10"),
        accelerator: Accelerator::Cuda(text("12.6")),
        mobile: false,
        no_ops: false,
        group: Group::Trunk,
        shard_count: None,
    },
    BuildDescriptor {
        id: text("linux-focal-rocm-py3.10"),
        os: text("ubuntu-latest"),
        compiler: text("rocm"),
        python_version: text("3.10"),
        accelerator: Accelerator::None,
        mobile: false,
        no_ops: false,
        group: Group::Periodic,
        shard_count: None,
    },
    BuildDescriptor {
        id: text("linux-focal-rocm5.4-py3.9"),
        os: text("ubuntu-latest"),
        compiler: text("rocm"),
        python_version: text("3.9"),
        accelerator: Accelerator::Rocm(text("5.4")),
        mobile: false,
        no_ops: false,
        group: Group::Pull,
        shard_count: Some(4),
    },
];
