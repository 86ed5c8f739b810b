//! create-backend - Express API project scaffolding

use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::RawAnswers;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-backend")]
#[command(about = "CLI for scaffolding Express API backends")]
#[command(version)]
pub struct Args {
    /// Project name; prompts for every choice when omitted
    pub name: Option<String>,

    /// Generate TypeScript sources (also accepted as -ts)
    #[arg(long)]
    pub ts: bool,

    /// Database integration: none or mongo
    #[arg(long, value_name = "KIND")]
    pub db: Option<String>,

    /// Add a Cloudinary connection
    #[arg(long)]
    pub cloudinary: bool,

    /// YAML file with default answers (name, variant, database, media_cloud)
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// List the files that would be generated without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Accept defaults instead of prompting (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        // Flags that were not passed stay unset so presets and prompts can fill them
        CreateArgs {
            answers: RawAnswers {
                name: args.name,
                variant: args.ts.then(|| "ts".to_string()),
                database: args.db,
                media_cloud: args.cloudinary.then_some(true),
            },
            preset: args.preset,
            directory: args.dir,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

/// Accept the single-dash `-ts` spelling older invocations used
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ts" {
                OsString::from("--ts")
            } else {
                arg
            }
        })
        .collect()
}

fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse_from(normalize_legacy_flags(std::env::args_os()));
    let result: anyhow::Result<()> = scaffolder_core::run(args.into());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
