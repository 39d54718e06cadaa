use crate::output::Status;

use clap::Args;
use color_eyre::Result;

use matrix_service::MatrixGenerator;

/// Summarize the build catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list builds in this group
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let generator = MatrixGenerator::new();
    let builds = generator.select_builds(args.group.as_deref());

    let status = Status::always();
    status.header(&format!("{} build(s)", builds.len()));

    for build in builds {
        status.plain(&format!(
            "  {:<44} {:<9} {:<12} {} shard(s)",
            build.id,
            build.group.as_str(),
            generator.classify_config(build).as_str(),
            generator.shard_count(build)
        ));
        status.dim(&format!("    job: {}", generator.build_job_name(build)));
    }

    Ok(())
}
