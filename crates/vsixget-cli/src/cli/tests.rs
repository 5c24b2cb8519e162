//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn get_url_only() {
    let cmd = parse(&["vsixget", "get", "https://m.example/items?itemName=a.b"]);
    match cmd {
        CliCommand::Get {
            url,
            dir,
            link_only,
            copy,
        } => {
            assert_eq!(url, "https://m.example/items?itemName=a.b");
            assert!(dir.is_none());
            assert!(!link_only);
            assert!(!copy);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn get_with_flags() {
    let cmd = parse(&[
        "vsixget",
        "get",
        "https://m.example/items?itemName=a.b",
        "--dir",
        "/tmp/vsix",
        "--link-only",
        "--copy",
    ]);
    match cmd {
        CliCommand::Get {
            dir,
            link_only,
            copy,
            ..
        } => {
            assert_eq!(dir.as_deref(), Some(std::path::Path::new("/tmp/vsix")));
            assert!(link_only);
            assert!(copy);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn interactive_subcommand() {
    assert!(matches!(
        parse(&["vsixget", "interactive"]),
        CliCommand::Interactive
    ));
}

#[test]
fn get_requires_url() {
    assert!(Cli::try_parse_from(["vsixget", "get"]).is_err());
}
