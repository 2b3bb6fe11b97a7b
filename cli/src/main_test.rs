use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn tracking_order_takes_identifier() {
    let cli = Cli::try_parse_from(["supply-cli", "tracking", "order", "PO 42"]).expect("parse");
    assert!(matches!(
        cli.command,
        Command::Tracking(TrackingCommand { command: TrackingSubcommand::Order { ref order_id } }) if order_id == "PO 42"
    ));
}

#[test]
fn login_requires_email() {
    assert!(Cli::try_parse_from(["supply-cli", "login", "--password", "longenough"]).is_err());
}

#[test]
fn timeout_and_session_file_have_defaults() {
    let cli = Cli::try_parse_from(["supply-cli", "logout"]).expect("parse");
    assert_eq!(cli.timeout_secs, 30);
    assert!(!cli.session_file.as_os_str().is_empty());
}

#[test]
fn signup_confirmation_defaults_to_password() {
    let cli = Cli::try_parse_from([
        "supply-cli",
        "signup",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
        "--username",
        "ada",
        "--email",
        "ada@example.com",
        "--password",
        "analytical",
    ])
    .expect("parse");
    let Command::Signup(args) = cli.command else {
        panic!("expected signup");
    };
    let draft = signup_draft(args);
    assert_eq!(draft.confirm_password, "analytical");
    assert!(draft.validate().is_empty());
}

#[test]
fn rejected_error_lists_every_message() {
    let err = CliError::Rejected(vec!["Email is required.".to_owned(), "Password is required.".to_owned()]);
    assert_eq!(err.to_string(), "Email is required.\nPassword is required.");
}
