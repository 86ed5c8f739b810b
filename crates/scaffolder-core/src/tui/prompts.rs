//! Charm-style CLI prompts using cliclack

use crate::config::preset::load_preset;
use crate::config::{Database, ProjectConfig, RawAnswers, Variant, DEFAULT_PROJECT_NAME};
use crate::project::{materialize, preview, GenerationReport, LocalStorage};
use crate::{runtime, summary};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Answers given as command-line flags; these override the preset
    pub answers: RawAnswers,

    /// YAML preset file with default answers
    pub preset: Option<PathBuf>,

    /// Directory to create the project in (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Print the files that would be generated without writing them
    pub dry_run: bool,

    /// Accept defaults instead of prompting (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI, prompting for any choice the arguments leave open
pub fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("create-backend")?;

    // Step 1: Merge command-line answers over the preset
    let preset = match &args.preset {
        Some(path) => {
            let answers = load_preset(path)?;
            cliclack::log::info(format!("Using preset {}", path.display()))?;
            answers
        }
        None => RawAnswers::default(),
    };
    let answers = args.answers.clone().or(preset);

    // Step 2: Without a project name, ask for every choice
    let answers = if answers.name.is_some() {
        answers
    } else if args.yes {
        answers.or(RawAnswers::defaults())
    } else if console::user_attended() {
        prompt_answers(answers).context("prompt cancelled")?
    } else {
        anyhow::bail!("No project name given. Pass a name or --yes when not running in a terminal.");
    };

    // Step 3: Validate
    let config = ProjectConfig::normalize(answers)?;
    cliclack::log::info(describe(&config))?;

    let invocation_root = select_directory(&args)?;

    if args.dry_run {
        let report = preview(&config, &invocation_root, &LocalStorage)?;
        print_plan(&report);
        cliclack::outro("Dry run: nothing was written")?;
        return Ok(());
    }

    // Step 4: Generate
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let report = match materialize(&config, &invocation_root, &LocalStorage) {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Project creation failed");
            return Err(e.into());
        }
    };
    spinner.stop(format!(
        "Created {} files in {}",
        report.artifacts.len(),
        report.root.display()
    ));

    // Step 5: Toolchain advisories never fail the run
    for warning in runtime::check_toolchain() {
        cliclack::log::warning(warning)?;
    }

    // Step 6: Show next steps
    print_next_steps(&config, &report)?;

    Ok(())
}

fn prompt_answers(initial: RawAnswers) -> Result<RawAnswers> {
    let name: String = cliclack::input("Enter the project name:")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .interact()?;

    let variant: Variant = cliclack::select("Choose language:")
        .item(Variant::Typed, Variant::Typed.display_name(), "")
        .item(Variant::Untyped, Variant::Untyped.display_name(), "")
        .initial_value(
            initial
                .variant
                .as_deref()
                .and_then(Variant::parse)
                .unwrap_or_default(),
        )
        .interact()?;

    let database: Database = cliclack::select("Database:")
        .item(Database::None, Database::None.display_name(), "")
        .item(
            Database::DocumentStore,
            Database::DocumentStore.display_name(),
            "mongoose + express-mongo-sanitize",
        )
        .initial_value(
            initial
                .database
                .as_deref()
                .and_then(Database::parse)
                .unwrap_or_default(),
        )
        .interact()?;

    let media_cloud: bool = cliclack::confirm("Add Cloudinary connection?")
        .initial_value(initial.media_cloud.unwrap_or(false))
        .interact()?;

    Ok(RawAnswers {
        name: Some(name),
        variant: Some(variant.extension().to_string()),
        database: Some(database.key().to_string()),
        media_cloud: Some(media_cloud),
    })
}

fn describe(config: &ProjectConfig) -> String {
    format!(
        "Project: {} ({}, database: {}, Cloudinary: {})",
        config.name(),
        config.variant(),
        config.database(),
        if config.media_cloud() { "yes" } else { "no" }
    )
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("cannot read the current directory")?;

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }

    Ok(path)
}

fn print_plan(report: &GenerationReport) {
    println!();
    println!("  {} {}", "Would create".cyan().bold(), report.root.display());
    for dir in &report.directories {
        println!("  {} {}/", "dir ".dimmed(), dir.display());
    }
    for path in report.file_paths() {
        println!("  {} {}", "file".green(), path.display());
    }
    println!();
}

fn print_next_steps(config: &ProjectConfig, report: &GenerationReport) -> Result<()> {
    let current = std::env::current_dir().ok();
    let steps = summary::next_steps(&report.root, current.as_deref());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    println!();
    println!("  {} {}", "Tip:".yellow(), summary::module_tip(config.variant()));

    cliclack::outro("Happy coding!")?;

    Ok(())
}
