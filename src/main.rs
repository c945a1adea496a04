mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use sage::logging;
use settings::ResolvedConfig;
use tracing::info;
use workflow::AdviceWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in sage_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match logging::initialize(&resolved.log_level, resolved.log_file.as_deref()) {
		Ok(path) => info!(log_file = %path.display(), "sage starting"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	run_search(cli.output, resolved)
}

/// Execute the advice workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = AdviceWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
