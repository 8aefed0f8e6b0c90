// tests/workflow_test.rs
use git_qa_tag::cli::{run_with_repository, TagWorkflowArgs, WorkflowOutcome};
use git_qa_tag::config::Config;
use git_qa_tag::git::MockRepository;
use git_qa_tag::ui::Prompter;
use git_qa_tag::QaTagError;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn project(manifest: &str) -> (TempDir, TagWorkflowArgs) {
    let dir = TempDir::new().expect("Could not create temp dir");
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("package.json"), manifest).unwrap();

    let args = TagWorkflowArgs {
        workdir: dir.path().to_path_buf(),
        ..Default::default()
    };
    (dir, args)
}

fn answers(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn run(
    args: &TagWorkflowArgs,
    repo: &MockRepository,
    input: &str,
) -> Result<WorkflowOutcome, QaTagError> {
    run_with_repository(args, &Config::default(), repo, &mut answers(input))
}

fn created_tag(outcome: WorkflowOutcome) -> String {
    match outcome {
        WorkflowOutcome::Created(summary) => summary.tag,
        other => panic!("expected a created tag, got {:?}", other),
    }
}

#[test]
fn test_tag_number_is_count_of_existing_tags() {
    let (_dir, args) = project(r#"{"version": "1.2.0"}"#);

    for k in 0..4 {
        let mut repo = MockRepository::new("feature/ABC-123-foo");
        for i in 0..k {
            repo = repo.with_tag(format!("1.2.0-123.{}", i));
        }
        // Tags of other tickets and versions are not counted
        repo = repo.with_tag("1.2.0-1234.0").with_tag("1.1.0-123.0");

        let tag = created_tag(run(&args, &repo, "y\n").unwrap());
        assert_eq!(tag, format!("1.2.0-123.{}", k));
    }
}

#[test]
fn test_prefixed_ticket_is_normalised() {
    let (_dir, args) = project(r#"{"version": "1.2.0"}"#);
    let repo = MockRepository::new("feature/ABC-123-foo");

    match run(&args, &repo, "y\n").unwrap() {
        WorkflowOutcome::Created(summary) => {
            assert_eq!(summary.version, "1.2.0");
            assert_eq!(summary.ticket, "123");
            assert_eq!(summary.qa_version, 0);
            assert_eq!(summary.tag, "1.2.0-123.0");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(
        repo.pushed_tags(),
        vec![("origin".to_string(), "1.2.0-123.0".to_string())]
    );
}

#[test]
fn test_bare_number_branch() {
    let (_dir, args) = project(r#"{"version": "2.0.0"}"#);
    let repo = MockRepository::new("hotfix/456");

    assert_eq!(created_tag(run(&args, &repo, "Y\n").unwrap()), "2.0.0-456.0");
}

#[test]
fn test_branch_without_ticket_prompts() {
    let (_dir, args) = project(r#"{"version": "2.0.0"}"#);
    let repo = MockRepository::new("main");

    let tag = created_tag(run(&args, &repo, "QA-77\ny\n").unwrap());
    assert_eq!(tag, "2.0.0-77.0");
}

#[test]
fn test_detached_head_prompts() {
    let (_dir, args) = project(r#"{"version": "2.0.0"}"#);
    let repo = MockRepository::new("");

    assert_eq!(created_tag(run(&args, &repo, "9\ny\n").unwrap()), "2.0.0-9.0");
}

#[test]
fn test_blank_prompted_ticket_fails() {
    let (_dir, args) = project(r#"{"version": "2.0.0"}"#);
    let repo = MockRepository::new("main");

    let err = run(&args, &repo, "   \n").unwrap_err();
    assert!(matches!(err, QaTagError::EmptyTicketInput));
    assert_ne!(err.exit_code(), 0);
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_declining_cancels_without_mutation() {
    for answer in ["n\n", "\n", "", "x\n", "yes\n", "N\n"] {
        let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
        let repo = MockRepository::new("feature/ABC-1");

        let outcome = run(&args, &repo, answer).unwrap();
        assert_eq!(outcome, WorkflowOutcome::Cancelled, "answer {:?}", answer);
        assert!(repo.created_tags().is_empty());
        assert!(repo.pushed_tags().is_empty());
    }
}

#[test]
fn test_repeated_unconfirmed_runs_leave_tags_unchanged() {
    let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
    let repo = MockRepository::new("feature/ABC-1").with_tag("1.0.0-1.0");

    run(&args, &repo, "n\n").unwrap();
    run(&args, &repo, "n\n").unwrap();

    assert_eq!(repo.tags(), vec!["1.0.0-1.0".to_string()]);
}

#[test]
fn test_missing_version_field_fails_before_tagging() {
    let (_dir, args) = project(r#"{"name": "web"}"#);
    let repo = MockRepository::new("feature/ABC-1");

    let err = run(&args, &repo, "y\n").unwrap_err();
    assert!(matches!(err, QaTagError::MissingVersionField(_)));
    assert_ne!(err.exit_code(), 0);
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_tag_lookup_failure_starts_at_zero() {
    let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
    let repo = MockRepository::new("feature/ABC-1").failing_list();

    assert_eq!(created_tag(run(&args, &repo, "y\n").unwrap()), "1.0.0-1.0");
}

#[test]
fn test_creation_failure_skips_push() {
    let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
    let repo = MockRepository::new("feature/ABC-1").failing_create();

    let err = run(&args, &repo, "y\n").unwrap_err();
    assert!(matches!(err, QaTagError::TagCreationFailed { .. }));
    assert!(repo.pushed_tags().is_empty());
}

#[test]
fn test_push_failure_keeps_local_tag() {
    let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
    let repo = MockRepository::new("feature/ABC-1").failing_push();

    let err = run(&args, &repo, "y\n").unwrap_err();
    match &err {
        QaTagError::TagPushFailed { tag, remote, .. } => {
            assert_eq!(tag, "1.0.0-1.0");
            assert_eq!(remote, "origin");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_ne!(err.exit_code(), 0);
    assert_eq!(repo.created_tags(), vec!["1.0.0-1.0".to_string()]);
    assert!(err
        .remediation()
        .unwrap()
        .contains("git push origin 1.0.0-1.0"));
}

#[test]
fn test_sequence_gap_collides_and_fails_creation() {
    let (_dir, args) = project(r#"{"version": "1.0.0"}"#);
    let repo = MockRepository::new("feature/ABC-1")
        .with_tag("1.0.0-1.0")
        .with_tag("1.0.0-1.2");

    let err = run(&args, &repo, "y\n").unwrap_err();
    match err {
        QaTagError::TagCreationFailed { tag, .. } => assert_eq!(tag, "1.0.0-1.2"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_cargo_manifest() {
    let (dir, mut args) = project("{}");
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"svc\"\nversion = \"0.4.0\"\n",
    )
    .unwrap();
    args.manifest = Some("Cargo.toml".to_string());
    let repo = MockRepository::new("bugfix/OPS-31");

    assert_eq!(created_tag(run(&args, &repo, "y\n").unwrap()), "0.4.0-31.0");
}
