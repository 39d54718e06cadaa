use crate::output::Status;

use clap::Args;
use color_eyre::Result;

use matrix_service::{Group, MatrixGenerator, MatrixReporter, OutputFormat};

/// Generate the build/test matrix
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Filter by group (pull, trunk, periodic); empty means all groups
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Output format: json, pretty, yaml
    #[arg(long, short = 'o', default_value = "json")]
    pub format: String,

    /// Print progress to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Warning for a group filter that will select nothing
fn unknown_group_warning(group: &str) -> Option<String> {
    if group.is_empty() || Group::lookup(group).is_some() {
        return None;
    }
    Some(format!(
        "Unknown group '{}'. Valid groups: pull, trunk, periodic",
        group
    ))
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .map_err(|e: String| color_eyre::eyre::eyre!("{}", e))?;

    let status = Status::new(args.verbose);
    let generator = MatrixGenerator::new();

    match args.group.as_deref().filter(|group| !group.is_empty()) {
        Some(group) => {
            status.action("Generating", &format!("matrix for group '{}'", group));
            // Unknown groups are not an error, they just select nothing
            if let Some(warning) = unknown_group_warning(group) {
                status.warning(&warning);
            }
        }
        None => status.action("Generating", "matrix for all groups"),
    }

    let matrix = generator.generate_matrix(args.group.as_deref());

    for entry in &matrix {
        status.check(&format!(
            "{} ({} shards)",
            entry.build.job_name,
            entry.test.len()
        ));
    }
    if matrix.is_empty() {
        status.warning("No builds matched; emitting an empty matrix");
    } else {
        status.success(&format!("{} build(s) selected", matrix.len()));
    }

    println!("{}", MatrixReporter::render(&matrix, format)?);

    Ok(())
}
