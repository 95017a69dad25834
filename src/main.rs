mod cli;
mod config;

use cli::Args;
use config::Settings;
use dep_visualizer::adapters::outbound::console::StderrProgressReporter;
use dep_visualizer::adapters::outbound::filesystem::FileSystemGraphReader;
use dep_visualizer::adapters::outbound::formatters::ComparisonFormatter;
use dep_visualizer::adapters::outbound::network::{CachingMetadataProvider, NpmRegistryClient};
use dep_visualizer::adapters::outbound::process::NpmCli;
use dep_visualizer::application::dto::{AnalysisRequest, SourceMode};
use dep_visualizer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_visualizer::application::use_cases::{AnalyzeDependenciesUseCase, CompareWithNpmUseCase};
use dep_visualizer::shared::error::{DepVizError, ExitCode};
use dep_visualizer::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.log_filter());

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

/// `RUST_LOG` wins over the `-v` count
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref(), Path::new("."))?;
    let settings = Settings::resolve(&args, config)?;

    let request = AnalysisRequest::builder()
        .mode(args.mode)
        .package(args.package.clone().unwrap_or_default())
        .version(args.package_version.clone())
        .repo_path(args.repo_path.clone())
        .style(settings.style)
        .max_depth(settings.max_depth)
        .ignore(settings.ignore.clone())
        .build()?;

    if args.compare_npm && request.mode == SourceMode::File {
        return Err(DepVizError::InvalidArgument {
            name: "--compare-npm".to_string(),
            reason: "the npm comparison needs live mode".to_string(),
        }
        .into());
    }

    tracing::info!(
        package = %request.package,
        mode = %request.mode,
        style = %request.style,
        max_depth = request.options.max_depth,
        "starting analysis"
    );

    let metadata_provider =
        CachingMetadataProvider::new(NpmRegistryClient::new(settings.registry.clone())?);
    let progress_reporter = StderrProgressReporter::new();

    let report = if args.compare_npm {
        let use_case = CompareWithNpmUseCase::new(NpmCli::new(), metadata_provider, progress_reporter);
        let comparison = use_case.execute(&request).await?;
        ComparisonFormatter::new().format(&comparison)?
    } else {
        let use_case = AnalyzeDependenciesUseCase::new(
            FileSystemGraphReader::new(),
            metadata_provider,
            progress_reporter,
        );
        let response = use_case.execute(request).await?;

        eprintln!("{}", FormatterFactory::progress_message(response.style));
        FormatterFactory::create(response.style).format(&response)?
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&report)?;

    Ok(())
}
