mod cli;

use cli::Args;
use depviz::config::resolve_config;
use depviz::prelude::*;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(code) => process::exit(code.as_i32()),
    };

    let exit_code = match run(&args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ Unexpected error: {}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::Failure
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: &Args) -> Result<ExitCode> {
    let params = args.to_request_parameters();
    let formatter = ConsoleFormatter::new();

    // Nothing below this gate may touch the filesystem or the network
    let errors = RequestValidator::validate(&params);
    if !errors.is_empty() {
        eprint!("{}", formatter.format_validation_errors(&errors));
        return Ok(ExitCode::Failure);
    }

    let current_dir = std::env::current_dir()?;
    let config = resolve_config(args.config.as_deref(), &current_dir)?;

    let presenter = StdoutPresenter::new();
    presenter.present(&formatter.format_parameters(&params))?;

    let source = SourceFactory::create(
        SourceType::from_parameters(&params),
        &config.http_settings(),
        FallbackLookupTable::builtin(),
        StderrProgressReporter::new(),
    )?;

    let use_case = LookupDependenciesUseCase::new(source);
    let response = use_case.execute(&params).await;

    presenter.present(&formatter.format_dependencies(
        &response.package_name,
        response.version.as_deref(),
        &response.dependencies,
    ))?;

    Ok(ExitCode::Success)
}
