use std::path::Path;

use clap::Parser;

use schoolhub_auth::PrincipalRegistry;
use schoolhub_session::{FileStorage, Session, SessionConfig};
use schoolhub_shell::{Cli, Outcome, Shell};

/// One CLI invocation: a fresh process over the same storage file.
async fn invoke(storage: &Path, args: &[&str]) -> Outcome {
    let mut argv = vec!["schoolhub", "--storage", storage.to_str().unwrap()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("valid arguments");

    let session = Session::new(
        PrincipalRegistry::sample(),
        FileStorage::new(cli.storage.clone().unwrap()),
        SessionConfig::default(),
    );
    Shell::start(session).execute(cli.command).await.unwrap()
}

#[tokio::test]
async fn admin_impersonation_flow_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("local_storage.json");

    let out = invoke(&storage, &["whoami"]).await;
    assert!(!out.success);

    let out = invoke(&storage, &["login", "--email", "admin@system.com", "--password", "password"]).await;
    assert!(out.success, "{}", out.output);

    let out = invoke(&storage, &["check", "/subscriptions"]).await;
    assert_eq!(out.output, "access granted");

    let out = invoke(&storage, &["switch-role", "teacher"]).await;
    assert!(out.success, "{}", out.output);

    let out = invoke(&storage, &["whoami"]).await;
    assert!(out.output.contains("teacher@school.com"));

    let out = invoke(&storage, &["check", "/subscriptions"]).await;
    assert!(!out.success);

    // a teacher cannot switch back
    let out = invoke(&storage, &["switch-role", "system_admin"]).await;
    assert!(!out.success);

    let out = invoke(&storage, &["logout"]).await;
    assert!(out.success);

    let out = invoke(&storage, &["whoami"]).await;
    assert_eq!(out.output, "not signed in");
}

#[tokio::test]
async fn failed_login_does_not_create_session() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("local_storage.json");

    let out = invoke(&storage, &["login", "--email", "unknown@x.com", "--password", "password"]).await;
    assert_eq!(out.output, "invalid credentials");
    assert!(!storage.exists());

    let out = invoke(&storage, &["check", "/"]).await;
    assert_eq!(out.output, "access denied: not signed in");
}
