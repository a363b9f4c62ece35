mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};
use stemcell_core::kernel::constants::{APP_NAME, DEFINITION_FILE_ENV};
use stemcell_core::storage::StorageSystemError;
use stemcell_core::{
    Agent, Definition, DefinitionConfig, Error, Infrastructure, OperatingSystem, Result,
    StageCollection, StageGroupKind,
};

use crate::cli::{CliRenderer, OutputFormat};

/// Stemcell: select the build stages for a stemcell target
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Definition file (JSON, YAML or TOML). Defaults to $STEMCELL_DEFINITION.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Target infrastructure: aws, openstack, vsphere, vcloud
    #[arg(short, long, global = true)]
    infrastructure: Option<Infrastructure>,

    /// Guest operating system: centos, ubuntu
    #[arg(short, long, global = true)]
    operating_system: Option<OperatingSystem>,

    /// Agent implementation: go, ruby
    #[arg(short, long, global = true)]
    agent: Option<Agent>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one stage list for the definition
    Stages {
        /// operating-system, extract-operating-system, agent or infrastructure
        group: StageGroupKind,
    },
    /// Print the OS image and stemcell pipelines for the definition
    Pipeline,
    /// Print the infrastructure stages of every supported combination
    Matrix,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second init (e.g. under a test harness) is harmless.
    let _ = env_logger::Builder::from_env(env).format_target(false).try_init();
}

/// Merge the definition file (if any) with the axis flags; flags win.
fn resolve_definition(args: &CliArgs) -> Result<Definition> {
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var_os(DEFINITION_FILE_ENV).map(PathBuf::from));
    let from_file = match config_path {
        Some(path) => DefinitionConfig::load(&path)?,
        None => DefinitionConfig::new(),
    };
    let from_flags = DefinitionConfig {
        infrastructure: args.infrastructure,
        operating_system: args.operating_system,
        agent: args.agent,
    };
    from_file.merge(from_flags).into_definition()
}

fn run(args: &CliArgs) -> Result<String> {
    let renderer = CliRenderer::new(args.format);
    let rendered = match &args.command {
        Commands::Stages { group } => {
            let definition = resolve_definition(args)?;
            debug!("Selecting {} stages for {}", group, definition);
            renderer.stages(&StageCollection::new(&definition).stages_for(*group))
        }
        Commands::Pipeline => {
            let definition = resolve_definition(args)?;
            let collection = StageCollection::new(&definition);
            let pipelines = [
                collection.operating_system_image_pipeline()?,
                collection.stemcell_pipeline()?,
            ];
            renderer.pipelines(&pipelines)
        }
        Commands::Matrix => {
            let rows: Vec<_> = Definition::all()
                .into_iter()
                .map(|definition| {
                    let stages = StageCollection::new(&definition).infrastructure_stages();
                    (definition, stages)
                })
                .collect();
            renderer.matrix(&rows)
        }
    };
    rendered.map_err(|e| {
        error!("Failed to render output: {}", e);
        Error::from(StorageSystemError::SerializationError {
            format: "json".to_string(),
            source: Box::new(e),
        })
    })
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    debug!("{} starting with {:?}", APP_NAME, args);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            ExitCode::FAILURE
        }
    }
}
