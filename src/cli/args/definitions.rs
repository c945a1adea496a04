use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sage` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sage",
	version,
	long_version = long_version(),
	about = "Search the Advice Slip API as you type",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SAGE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Advice search endpoint; the query is appended as a path segment (default: https://api.adviceslip.com/advice/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Abort a lookup after this many seconds (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period after typing before a lookup is sent (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the heading above the prompt (default: Get wise with advice)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the input prompt label (default: What do you want advice about?)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level written to the log file; SAGE_LOG takes precedence (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: <cache dir>/sage.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
