mod error;
mod report;
mod rules;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use formcheck::validation::{FormController, ValidationMode};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::rules::{load_form, RuleSet};

/// Audit and validate a form described as a JSON element tree.
#[derive(Debug, Parser)]
#[command(name = "formcheck", version)]
struct Args {
    /// Form description (JSON element tree).
    #[arg(long)]
    form: PathBuf,

    /// Field rules (JSON rule set).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// When the host page would run validation.
    #[arg(long, value_enum, default_value_t = Mode::OnSubmit)]
    mode: Mode,

    #[arg(long, default_value = "formcheck.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    OnSubmit,
    OnChange,
    OnBlur,
}

impl From<Mode> for ValidationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::OnSubmit => Self::OnSubmit,
            Mode::OnChange => Self::OnChange,
            Mode::OnBlur => Self::OnBlur,
        }
    }
}

fn init_logger(args: &Args) -> Result<(), CliError> {
    let log_file = File::create(&args.log_file).map_err(|source| CliError::Io {
        path: args.log_file.clone(),
        source,
    })?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .map_err(|e| CliError::Logger(e.to_string()))
}

/// Returns whether the form validated.
fn run(args: &Args) -> Result<bool, CliError> {
    init_logger(args)?;

    let (mut doc, form) = load_form(&args.form)?;
    log::info!("loaded form from {}", args.form.display());

    let mut controller = FormController::attach(&doc, form, args.mode.into());
    if let Some(path) = &args.rules {
        RuleSet::load(path)?.apply(&doc, &mut controller)?;
    }

    let structure = controller.check_structure(&doc);
    let result = controller.validate(&mut doc);

    print!("{}", report::render_structure(&structure));
    print!("{}", report::render_validation(&result));

    log::info!(
        "{} issue(s), form valid: {}",
        structure.issues.len(),
        result.is_valid
    );
    Ok(result.is_valid)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
