//! Main workflow orchestration logic
//!
//! Runs the tagging flow from precondition checks to the summary. `main.rs`
//! only parses arguments, sets up logging and maps the outcome to an exit
//! code, so the workflow can be driven programmatically and in tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{QaTag, TagPrefix, TicketId, TicketMatcher};
use crate::error::{QaTagError, Result};
use crate::git::{self, Repository};
use crate::manifest;
use crate::preconditions;
use crate::ui::{self, Prompter, TagSummary};

/// Arguments for the tag workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// `None` fields fall back to the loaded [Config].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagWorkflowArgs {
    /// Repository root the tool runs in
    pub workdir: PathBuf,

    /// Manifest path relative to `workdir`
    pub manifest: Option<String>,

    /// Remote to push the tag to
    pub remote: Option<String>,

    /// Ticket given on the command line, skipping extraction and prompt
    pub ticket: Option<String>,

    /// Skip the confirmation prompt
    pub yes: bool,

    /// Compute and display only
    pub dry_run: bool,
}

impl TagWorkflowArgs {
    fn manifest_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.manifest.as_deref().unwrap_or(&config.manifest)
    }

    fn remote_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.remote.as_deref().unwrap_or(&config.remote)
    }
}

/// How a workflow run ended without error
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Tag created and pushed
    Created(TagSummary),
    /// Operator declined at the confirmation prompt
    Cancelled,
    /// `--dry-run`: nothing was changed
    DryRun { tag: String },
}

/// Full workflow against the configured git backend.
///
/// Checks preconditions before the repository is opened, so a missing
/// `.git` is reported as [QaTagError::NotARepository] whatever the backend.
pub fn run_tag_workflow<R: BufRead, W: Write>(
    args: &TagWorkflowArgs,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<WorkflowOutcome> {
    let manifest_path = preconditions::check(&args.workdir, args.manifest_name(config))?;

    let repo = git::open(config.backend, &args.workdir)?;
    run_steps(args, config, &manifest_path, &repo, prompter)
}

/// Workflow steps after the repository is available.
///
/// Nothing is written to the repository before the operator confirms.
pub fn run_with_repository<G: Repository, R: BufRead, W: Write>(
    args: &TagWorkflowArgs,
    config: &Config,
    repo: &G,
    prompter: &mut Prompter<R, W>,
) -> Result<WorkflowOutcome> {
    let manifest_path = args.workdir.join(args.manifest_name(config));
    run_steps(args, config, &manifest_path, repo, prompter)
}

fn run_steps<G: Repository, R: BufRead, W: Write>(
    args: &TagWorkflowArgs,
    config: &Config,
    manifest_path: &Path,
    repo: &G,
    prompter: &mut Prompter<R, W>,
) -> Result<WorkflowOutcome> {
    let version = manifest::read_version(manifest_path)?;
    ui::display_field("Package Version", version.as_str());

    if !version.is_semver() {
        ui::display_boundary_warning(&BoundaryWarning::NonSemverVersion {
            version: version.to_string(),
        });
    }

    let branch = repo.current_branch()?;
    ui::display_field("Current Branch", &branch.to_string());

    let matcher = TicketMatcher::new(&config.ticket)?;
    let ticket = match args.ticket.as_deref() {
        Some(input) => TicketId::from_input(input)?,
        None => match matcher.extract(&branch) {
            Some(ticket) => ticket,
            None => {
                ui::display_boundary_warning(&BoundaryWarning::TicketNotInBranch {
                    branch: branch.to_string(),
                });
                prompter.ask_ticket()?
            }
        },
    };
    let ticket_part = matcher.normalize(&ticket);
    ui::display_field(
        "Ticket Number",
        &format!("{} (using: {})", ticket, ticket_part),
    );

    let prefix = TagPrefix::new(&version, &ticket_part);
    let existing = lookup_existing_tags(repo, &prefix);
    let tag = QaTag::next(prefix, existing);

    ui::display_status(&format!("{} related tags already exist", tag.existing.len()));
    ui::display_field("QA Version", &tag.qa_version.to_string());
    ui::display_proposed_tag(&tag.name);
    ui::display_existing_tags(&tag.existing);

    if tag.collides() {
        ui::display_boundary_warning(&BoundaryWarning::SequenceCollision {
            tag: tag.name.clone(),
            existing: tag.existing.len(),
        });
    }

    let remote = args.remote_name(config);

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!("  Step 1: would create local tag {}", tag.name));
        ui::display_success(&format!("  Step 2: would push {} to {}", tag.name, remote));
        return Ok(WorkflowOutcome::DryRun { tag: tag.name });
    }

    if !args.yes && !prompter.confirm_tag(&tag.name)? {
        ui::display_cancelled("Operation cancelled");
        return Ok(WorkflowOutcome::Cancelled);
    }

    ui::display_status(&format!("Creating tag: {}", tag.name));
    repo.create_tag(&tag.name)
        .map_err(|e| QaTagError::TagCreationFailed {
            tag: tag.name.clone(),
            reason: e.to_string(),
        })?;
    ui::display_success(&format!("Created tag: {}", tag.name));

    ui::display_status(&format!("Pushing tag: {} to {}", tag.name, remote));
    repo.push_tag(remote, &tag.name)
        .map_err(|e| QaTagError::TagPushFailed {
            tag: tag.name.clone(),
            remote: remote.to_string(),
            reason: e.to_string(),
        })?;
    ui::display_success(&format!("Pushed tag: {} to {}", tag.name, remote));

    let summary = TagSummary {
        version: version.to_string(),
        ticket: ticket_part,
        qa_version: tag.qa_version,
        tag: tag.name,
    };
    ui::display_summary(&summary);

    Ok(WorkflowOutcome::Created(summary))
}

/// Existing tags for the prefix; a failed lookup counts as none
fn lookup_existing_tags<G: Repository>(repo: &G, prefix: &TagPrefix) -> Vec<String> {
    let pattern = prefix.glob();

    match repo.list_tags(&pattern) {
        Ok(tags) => tags,
        Err(e) => {
            log::warn!(
                "{}",
                BoundaryWarning::TagLookupFailed {
                    pattern,
                    reason: e.to_string(),
                }
            );
            Vec::new()
        }
    }
}
