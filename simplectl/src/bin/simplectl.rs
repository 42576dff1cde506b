use anyhow::{
    bail,
    Context,
};
use clap::{
    Parser,
    Subcommand,
};
use simplecore::{
    parameter::{
        Argument,
        MultiArguments,
        MultiOptions,
        Opt,
        Parameter,
        ParameterCreator,
    },
    structure::SimpleCellar,
    task::{
        SimpleTask,
        TaskFile,
    },
};
use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};


#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(long, value_name = "SIMPLES_TASK_ROOT", env = "SIMPLES_TASK_ROOT")]
    root: PathBuf,
}


#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    New {
        program: String,
        #[clap(short = 'f', long = "force", action)]
        force: bool,
    },
    #[command(arg_required_else_help = true)]
    Param {
        #[command(subcommand)]
        param: Param,
    },
    Show {
        #[clap(short = 'j', long = "json", action)]
        json: bool,
    },
    Paths,
    Run {
        #[clap(long, value_name = "SIMPLES_CELLAR", env = "SIMPLES_CELLAR")]
        cellar: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum Param {
    /// A flag followed by a value
    #[command(arg_required_else_help = true)]
    Arg {
        #[arg(allow_hyphen_values = true)]
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// A flag repeated before each of the values
    #[command(arg_required_else_help = true)]
    Args {
        #[arg(allow_hyphen_values = true)]
        key: String,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// A positional value
    #[command(arg_required_else_help = true)]
    Opt {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Positional values
    #[command(arg_required_else_help = true)]
    Opts {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// A parameter in its JSON record form
    #[command(arg_required_else_help = true)]
    Record {
        json: String,
    },
}

impl TryFrom<Param> for Parameter {
    type Error = anyhow::Error;

    fn try_from(param: Param) -> anyhow::Result<Self> {
        Ok(match param {
            Param::Arg { key, value } => Argument::new(key, value).into(),
            Param::Args { key, values } => MultiArguments::new(key, values).into(),
            Param::Opt { value } => Opt::new(value).into(),
            Param::Opts { values } => MultiOptions::new(values).into(),
            Param::Record { json } => ParameterCreator::create(
                &serde_json::from_str::<serde_json::Value>(&json)?
            )?,
        })
    }
}


fn create_task(root: &Path, program: String, force: bool) -> anyhow::Result<SimpleTask> {
    let task = SimpleTask::new(root, program);
    let path = task.structure().task_file();
    if path.exists() && !force {
        bail!("a task already exists at {path:?}; use --force to replace it");
    }
    task.save()?;
    Ok(task)
}

fn append_param(root: &Path, param: Param) -> anyhow::Result<SimpleTask> {
    let mut task = SimpleTask::load(root)?;
    let parameter = Parameter::try_from(param)?;
    log::info!("adding {} parameter: {}", parameter.kind(), parameter);
    task.add_param(parameter);
    task.save()?;
    Ok(task)
}

/// Replaces the task's command with the cellar's `bin/<command>` when that
/// file exists.  The replacement is absolute as the tool is launched from
/// within the task root.
fn use_cellar(task: &mut SimpleTask, cellar: &Path) -> anyhow::Result<bool> {
    let bin = SimpleCellar::new(cellar).bin(task.command());
    if !bin.is_file() {
        log::debug!("{} not in cellar, using command as given", task.command());
        return Ok(false);
    }
    let bin = fs::canonicalize(&bin)
        .with_context(|| format!("failed to resolve {}", bin.display()))?;
    log::info!("using {} from cellar", bin.display());
    task.set_command(bin.to_string_lossy());
    Ok(true)
}

fn run_task(root: &Path, cellar: Option<&Path>) -> anyhow::Result<SimpleTask> {
    let mut task = SimpleTask::load(root)?;
    if let Some(cellar) = cellar {
        use_cellar(&mut task, cellar)?;
    }
    if !task.run()? {
        bail!(
            "task failed; see {} and {}",
            task.structure().status().display(),
            task.structure().stderr().display(),
        );
    }
    Ok(task)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("simplecore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match args.command {
        Commands::New { program, force } => {
            let task = create_task(&args.root, program, force)?;
            println!(
                "task '{}' created at {}",
                task.command(),
                task.structure().task_file().display(),
            );
        }
        Commands::Param { param } => {
            println!("{}", append_param(&args.root, param)?);
        }
        Commands::Show { json } => {
            let task = SimpleTask::load(&args.root)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&TaskFile::from(&task))?);
            } else {
                println!("{}", task);
            }
        }
        Commands::Paths => {
            let structure = SimpleTask::load(&args.root)?.structure();
            println!("task:   {}", structure.task_file().display());
            println!("stdout: {}", structure.stdout().display());
            println!("stderr: {}", structure.stderr().display());
            println!("status: {}", structure.status().display());
            println!("data:   {}", structure.data_dir().display());
            println!("output: {}", structure.output_dir().display());
        }
        Commands::Run { cellar } => {
            run_task(&args.root, cellar.as_deref())?;
            println!("task completed");
        }
    }

    Ok(())
}
