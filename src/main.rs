use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use herald::cli::{run_workflow, WorkflowArgs};
use herald::config;
use herald::error::{HeraldError, EXIT_RUNTIME, EXIT_SUCCESS};
use herald::git::Git2Repository;
use herald::github::GhCli;
use herald::model::ClaudeCli;
use herald::ui::{self, Palette};

#[derive(clap::Parser)]
#[command(
    name = "herald",
    version,
    about = "Generate GitHub release notes from commit history with Claude"
)]
struct Args {
    #[arg(help = "Release tag, or 'latest' for the most recent release")]
    tag: String,

    #[arg(help = "Additional instructions for the model")]
    instructions: Option<String>,

    #[arg(short, long, env = "HERALD_MODEL", help = "Model alias or full name")]
    model: Option<String>,

    #[arg(short, long, help = "Notes file path (prompt is saved alongside)")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Skip the confirmation prompt")]
    no_confirm: bool,

    #[arg(long, help = "Omit the attribution footer")]
    no_footer: bool,

    #[arg(long, help = "Generate notes without updating the release")]
    dry_run: bool,

    #[arg(short, long, help = "Detailed output")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let palette = Palette::detect();
    let code = match run(args, &palette) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ui::display_error(&palette, &e.to_string());
            e.downcast_ref::<HeraldError>()
                .map(HeraldError::exit_code)
                .unwrap_or(EXIT_RUNTIME)
        }
    };
    std::process::exit(code);
}

fn run(args: Args, palette: &Palette) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let repo = Git2Repository::open(".")?;
    let host = GhCli::new(config.retry.gh_attempts());
    host.check_available()?;
    let model = ClaudeCli::new(args.model.or_else(|| config.generation.model.clone()));
    model.check_available()?;

    let mut workflow_args = WorkflowArgs::new(args.tag, env!("CARGO_PKG_VERSION"));
    workflow_args.instructions = args.instructions.filter(|s| !s.trim().is_empty());
    workflow_args.output = args.output;
    workflow_args.confirm = !args.no_confirm;
    workflow_args.footer = !args.no_footer;
    workflow_args.dry_run = args.dry_run;
    workflow_args.verbose = args.verbose;
    let workflow_args = workflow_args.with_config(&config);

    if let Some(m) = model.model() {
        log::info!("Using model {}", m);
    }

    run_workflow(workflow_args, &repo, &host, &model, palette, |prompt| {
        ui::confirm_action(palette, prompt)
            .map_err(|e| HeraldError::runtime(format!("failed to read confirmation: {}", e)))
    })?;

    Ok(())
}
