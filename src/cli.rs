use clap::Parser;
use depviz::dependency_lookup::domain::request_parameters::DEFAULT_OUTPUT_PATH;
use depviz::dependency_lookup::domain::RequestParameters;
use depviz::shared::error::ExitCode;
use std::path::PathBuf;

/// Print the direct dependencies of a package
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(about = "Print the direct dependencies of a Python package", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Name of the package to analyze
    #[arg(short, long)]
    pub package: String,

    /// Package index URL, or path to a fixture file in test mode
    #[arg(short, long)]
    pub repository: String,

    /// Read dependencies from a local fixture file instead of the index
    #[arg(short, long)]
    pub test_mode: bool,

    /// Package version to look up
    #[arg(short, long)]
    pub version: Option<String>,

    /// File name for the generated graph image (reserved)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Print dependencies as an ASCII tree (reserved)
    #[arg(short, long)]
    pub ascii_tree: bool,

    /// Substring for filtering packages (reserved)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Path to a config file (defaults to ./depviz.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses argv. On failure the usage or help text has already been
    /// printed and the exit code to use is returned.
    pub fn parse_args() -> Result<Self, ExitCode> {
        Self::try_parse().map_err(|e| {
            let _ = e.print();
            usage_exit_code(&e)
        })
    }

    pub fn to_request_parameters(&self) -> RequestParameters {
        RequestParameters::builder()
            .package_name(self.package.as_str())
            .repository_location(self.repository.as_str())
            .version(self.version.clone())
            .test_mode(self.test_mode)
            .output_path(self.output.as_str())
            .ascii_tree(self.ascii_tree)
            .filter(self.filter.clone())
            .build()
    }
}

/// Help and version requests are not failures
fn usage_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
