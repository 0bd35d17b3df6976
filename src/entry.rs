use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tokio::time::Instant;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{ClientSettings, ExecutionSettings, execute_run};
use crate::report::{RunSummary, render_report};
use crate::requests::{RequestDescriptor, load_request_file};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    apply_config(&mut args, &matches)?;
    let descriptors = load_descriptors(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(run_async(&args, &descriptors))?;
    println!("{}", render_report(&summary, args.output_format)?);
    Ok(())
}

fn parse_args() -> AppResult<(TesterArgs, ArgMatches)> {
    let matches = TesterArgs::command().get_matches();
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn load_descriptors(args: &TesterArgs) -> AppResult<Vec<RequestDescriptor>> {
    let Some(path) = args.requests_file.as_deref() else {
        tracing::error!("Missing requests file (set --requests-file or provide in config).");
        return Err(AppError::validation(ValidationError::MissingRequestsFile));
    };
    let descriptors = load_request_file(Path::new(path))?;
    tracing::info!("Loaded {} request descriptors from {}", descriptors.len(), path);
    Ok(descriptors)
}

async fn run_async(args: &TesterArgs, descriptors: &[RequestDescriptor]) -> AppResult<RunSummary> {
    let settings = ExecutionSettings::from(args);
    let client_settings = ClientSettings::from(args);

    let started = Instant::now();
    let accumulator = execute_run(descriptors, &settings, &client_settings).await?;
    let wall_time = started.elapsed();

    Ok(RunSummary::from_accumulator(&accumulator).with_wall_time(wall_time))
}
