use anyhow::Result;
use clap::Parser;

use git_qa_tag::cli::{run_tag_workflow, TagWorkflowArgs, WorkflowOutcome};
use git_qa_tag::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-qa-tag",
    version,
    about = "Create and push QA tags named after the project version and branch ticket"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Manifest file to read the version from")]
    manifest: Option<String>,

    #[arg(short, long, help = "Remote to push the tag to")]
    remote: Option<String>,

    #[arg(short, long, help = "Ticket number, instead of reading it from the branch name")]
    ticket: Option<String>,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,

    #[arg(long, help = "Preview the tag without creating or pushing it")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    ctrlc::set_handler(|| {
        println!();
        ui::display_cancelled("Operation interrupted");
        std::process::exit(0);
    })?;

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(e.exit_code());
        }
    };
    log::debug!("Loaded configuration: {:?}", config);

    let workflow_args = TagWorkflowArgs {
        workdir: std::env::current_dir()?,
        manifest: args.manifest,
        remote: args.remote,
        ticket: args.ticket,
        yes: args.yes,
        dry_run: args.dry_run,
    };

    ui::display_banner();

    let mut prompter = ui::Prompter::stdio();
    match run_tag_workflow(&workflow_args, &config, &mut prompter) {
        Ok(WorkflowOutcome::Created(summary)) => {
            ui::display_success(&format!(
                "Done! Tag '{}' created and pushed",
                summary.tag
            ));
            Ok(())
        }
        Ok(WorkflowOutcome::Cancelled) | Ok(WorkflowOutcome::DryRun { .. }) => Ok(()),
        Err(e) => {
            ui::display_error(&e.to_string());
            if let Some(hint) = e.remediation() {
                ui::display_status(&hint);
            }
            std::process::exit(e.exit_code());
        }
    }
}
