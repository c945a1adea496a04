use clap::{CommandFactory, FromArgMatches};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_carries_about_text() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["sage"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.endpoint.is_none());
	assert!(!parsed.print_config);
}

#[test]
fn lookup_flags_are_parsed() {
	let parsed = parse(&[
		"sage",
		"--endpoint",
		"http://localhost:8080/advice/search",
		"--timeout",
		"3",
		"-d",
		"250",
		"-q",
		"love",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);

	assert_eq!(
		parsed.endpoint.as_deref(),
		Some("http://localhost:8080/advice/search")
	);
	assert_eq!(parsed.timeout_secs, Some(3));
	assert_eq!(parsed.debounce_ms, Some(250));
	assert_eq!(parsed.initial_query.as_deref(), Some("love"));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn rejects_unknown_output_format() {
	let result = CliArgs::command().try_get_matches_from(["sage", "--output", "yaml"]);
	assert!(result.is_err());
}

#[test]
fn version_details_list_every_app_directory() {
	let details = super::styles::version_details();
	assert!(details.starts_with(&format!("sage {}", env!("CARGO_PKG_VERSION"))));
	for label in ["config directory: ", "data directory: ", "cache directory: "] {
		assert!(details.contains(label), "missing {label:?} in {details}");
	}
}
