use crate::output::Status;

use clap::Args;
use color_eyre::Result;

use matrix_service::matrix::nested::MAX_DEPTH;
use matrix_service::{nested_matrix, MatrixReporter, OutputFormat};

/// Generate a depth-limited include matrix
#[derive(Args, Debug)]
pub struct NestedArgs {
    /// Depth of the job requesting the matrix
    #[arg(default_value_t = 0)]
    pub depth: u32,

    /// Output format: json, pretty, yaml
    #[arg(long, short = 'o', default_value = "json")]
    pub format: String,

    /// Print progress to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub fn execute(args: NestedArgs) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .map_err(|e: String| color_eyre::eyre::eyre!("{}", e))?;

    let matrix = nested_matrix(args.depth);

    let status = Status::new(args.verbose);
    status.action("Nesting", &format!("depth {} of {}", args.depth, MAX_DEPTH));
    if matrix.include.is_empty() {
        status.info("Maximum depth reached; no child jobs");
    } else {
        status.info(&format!("{} child job(s)", matrix.include.len()));
    }

    println!("{}", MatrixReporter::render(&matrix, format)?);

    Ok(())
}
