//! CLI-to-configuration pipeline tests
//!
//! Drives the public API the way `main` does: parse flags, convert to a
//! partial configuration, resolve against settings.

use clap::Parser;
use quickterm::core::cli::Cli;
use quickterm::core::config::{default_shell, resolve, PartialSessionConfig};
use quickterm::core::settings::Settings;
use quickterm::{parse_color, DEFAULT_ACTION_ICON};

fn resolve_args(args: &[&str]) -> quickterm::SessionConfig {
    let mut argv = vec!["quickterm"];
    argv.extend_from_slice(args);
    let partial = Cli::try_parse_from(argv)
        .expect("flags should parse")
        .into_partial_config()
        .expect("conversion should succeed");
    resolve(partial, &Settings::default())
}

#[test]
fn no_flags_yields_documented_defaults() {
    let config = resolve_args(&[]);

    assert_eq!(
        config.working_directory,
        std::env::current_dir().unwrap()
    );
    assert_eq!(config.command, vec![default_shell()]);
    assert!(config.environment.is_empty());
    assert!(config.actions.is_empty());
    assert!(config.dark_theme);
    assert!(config.palette.is_none());
}

#[test]
fn full_flag_set_resolves_into_one_config() {
    let config = resolve_args(&[
        "--cwd",
        "/tmp",
        "--command",
        "bash -c 'sleep 1'",
        "--env",
        "A=1 B=2",
        "--actions",
        "Build:system-run-symbolic:make build,Test:make test",
        "--light-theme",
        "--palette",
        "#ffffff #000000",
    ]);

    assert_eq!(config.working_directory.to_str(), Some("/tmp"));
    assert_eq!(
        config.command,
        vec!["bash".to_string(), "-c".to_string(), "sleep 1".to_string()]
    );
    assert_eq!(config.environment, vec!["A=1", "B=2"]);

    assert_eq!(config.actions.len(), 2);
    assert_eq!(config.actions[0].tooltip, "Build");
    assert_eq!(config.actions[0].icon, "system-run-symbolic");
    assert_eq!(config.actions[0].command, "make build");
    assert_eq!(config.actions[1].icon, DEFAULT_ACTION_ICON);

    assert!(!config.dark_theme);

    let palette = config.palette.expect("palette should be set");
    assert_eq!(palette.foreground, parse_color("white").unwrap());
    assert_eq!(palette.background, parse_color("black").unwrap());
}

#[test]
fn short_flags_match_long_flags() {
    let config = resolve_args(&["-w", "/tmp", "-c", "top", "-e", "TERM=dumb", "-d"]);

    assert_eq!(config.working_directory.to_str(), Some("/tmp"));
    assert_eq!(config.command, vec!["top".to_string()]);
    assert_eq!(config.environment, vec!["TERM=dumb"]);
    assert!(!config.dark_theme);
}

#[test]
fn malformed_palette_token_falls_back_without_error() {
    let config = resolve_args(&["--palette", "badtoken #000000"]);
    assert!(config.palette.is_none());
}

#[test]
fn malformed_action_descriptors_are_dropped_not_fatal() {
    let config = resolve_args(&["--actions", "bad::::,Valid:run"]);
    assert_eq!(config.actions.len(), 1);
    assert_eq!(config.actions[0].tooltip, "Valid");
}

#[test]
fn unknown_flags_are_a_parse_error() {
    assert!(Cli::try_parse_from(["quickterm", "--frobnicate"]).is_err());
    assert!(Cli::try_parse_from(["quickterm", "-z"]).is_err());
}

#[test]
fn settings_provide_fallbacks_below_cli() {
    let settings = Settings {
        working_directory: "/srv/projects".to_string(),
        shell: "/bin/dash".to_string(),
        font_size: 12.0,
        dark_theme: false,
    };

    // CLI silent: settings apply.
    let partial = Cli::try_parse_from(["quickterm"])
        .unwrap()
        .into_partial_config()
        .unwrap();
    let config = resolve(partial, &settings);
    assert_eq!(config.working_directory.to_str(), Some("/srv/projects"));
    assert_eq!(config.command, vec!["/bin/dash".to_string()]);
    assert!(!config.dark_theme);
    assert_eq!(config.font_size, 12.0);

    // CLI wins where provided.
    let partial = Cli::try_parse_from(["quickterm", "-w", "/elsewhere", "-c", "htop"])
        .unwrap()
        .into_partial_config()
        .unwrap();
    let config = resolve(partial, &settings);
    assert_eq!(config.working_directory.to_str(), Some("/elsewhere"));
    assert_eq!(config.command, vec!["htop".to_string()]);
}

#[test]
fn empty_command_value_falls_back_to_default_shell() {
    let config = resolve_args(&["--command", "   "]);
    assert_eq!(config.command, vec![default_shell()]);
}

#[test]
fn resolve_is_deterministic() {
    let settings = Settings::default();
    let a = resolve(PartialSessionConfig::default(), &settings);
    let b = resolve(PartialSessionConfig::default(), &settings);
    assert_eq!(a.working_directory, b.working_directory);
    assert_eq!(a.command, b.command);
    assert_eq!(a.dark_theme, b.dark_theme);
}
