//! function-packager CLI
//!
//! Batch packaging of serverless functions per stage and region

use anyhow::Result;
use clap::{Parser, Subcommand};
use function_packager::project::provider;
use function_packager::{
    DistPackager, FunctionRef, PackagerError, PackagingOrchestrator, Project, ProjectLoader,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Batch packaging of serverless functions
#[derive(Parser)]
#[command(name = "function-packager")]
#[command(version = "0.1.0")]
#[command(about = "Package serverless functions per stage and region", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package management commands
    #[command(subcommand)]
    Package(PackageCommands),
}

#[derive(Subcommand)]
enum PackageCommands {
    /// Create packages for your functions
    Create {
        /// One or multiple function names
        #[arg(value_name = "NAMES")]
        names: Vec<String>,

        /// Stage (optional if only one stage is defined in the project)
        #[arg(short, long)]
        stage: Option<String>,

        /// Target one region only
        #[arg(short, long)]
        region: Option<String>,

        /// Package all functions
        #[arg(short, long)]
        all: bool,

        /// Project directory (defaults to current directory)
        #[arg(long, value_name = "PROJECT_PATH")]
        project_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Package(PackageCommands::Create {
            names,
            stage,
            region,
            all,
            project_path,
        }) => {
            let path = project_path.unwrap_or_else(|| PathBuf::from("."));
            create_command(path, names, stage, region, all).await
        }
    }
}

async fn create_command(
    project_path: PathBuf,
    names: Vec<String>,
    stage: Option<String>,
    region: Option<String>,
    all: bool,
) -> Result<i32> {
    println!("\n📦 function-packager\n");

    let project = Arc::new(ProjectLoader::load(&project_path).await?);

    let stage = resolve_stage(&project, stage).await?;
    let regions = resolve_regions(&project, &stage, region)?;
    let functions = resolve_functions(&project, names, all)?;

    project.ensure_tmp_dir().await?;

    let operation = Arc::new(DistPackager::new(Arc::clone(&project)));
    let orchestrator = PackagingOrchestrator::new(operation, provider::valid_regions());

    let report = orchestrator.run(&functions, &stage, &regions).await?;

    println!();
    report.print_summary();

    if report.is_fully_successful() {
        Ok(0)
    } else {
        Ok(1)
    }
}

/// Determine the stage: explicit flag, single defined stage, or prompt
async fn resolve_stage(project: &Project, stage: Option<String>) -> Result<String> {
    if let Some(stage) = stage {
        return Ok(stage);
    }

    let stages = project.get_all_stages();
    if stages.is_empty() {
        return Err(PackagerError::NoStages.into());
    }
    if stages.len() == 1 {
        return Ok(stages.into_iter().next().unwrap());
    }

    if !std::io::stdin().is_terminal() {
        return Err(PackagerError::StageRequired.into());
    }

    Ok(prompt_select_stage(&stages).await?)
}

/// Interactive stage selection from a numbered list
async fn prompt_select_stage(stages: &[String]) -> Result<String, PackagerError> {
    println!("Packager - Choose a stage:");
    for (i, stage) in stages.iter().enumerate() {
        println!("  {}) {}", i + 1, stage);
    }
    print_prompt("Select: ").await?;

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut answer = String::new();
    reader.read_line(&mut answer).await?;
    let answer = answer.trim();

    // Accept a list index or a literal stage name
    if let Ok(index) = answer.parse::<usize>() {
        if index >= 1 && index <= stages.len() {
            return Ok(stages[index - 1].clone());
        }
    }
    if let Some(stage) = stages.iter().find(|s| s.as_str() == answer) {
        return Ok(stage.clone());
    }

    Err(PackagerError::StageRequired)
}

async fn print_prompt(message: &str) -> Result<(), PackagerError> {
    let mut stdout = io::stdout();
    stdout.write_all(message.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

/// Determine target regions: a validated single region, or all stage regions
fn resolve_regions(
    project: &Project,
    stage: &str,
    region: Option<String>,
) -> Result<Vec<String>, PackagerError> {
    match region {
        Some(region) => {
            if !provider::is_valid_region(&region) {
                return Err(PackagerError::InvalidRegion { region });
            }
            Ok(vec![region])
        }
        None => project.get_all_region_names(stage),
    }
}

/// Resolve the target functions: named lookups, or every project function
fn resolve_functions(
    project: &Project,
    names: Vec<String>,
    all: bool,
) -> Result<Vec<FunctionRef>, PackagerError> {
    let functions = if all || names.is_empty() {
        project.get_all_functions()
    } else {
        names
            .into_iter()
            .map(|name| {
                project
                    .get_function(&name)
                    .ok_or(PackagerError::FunctionNotFound { name })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if functions.is_empty() {
        return Err(PackagerError::NoFunctions);
    }

    Ok(functions)
}
