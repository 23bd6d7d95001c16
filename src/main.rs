mod cli;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::LayoutWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	genlayout::logging::initialize(cli.verbose);

	let workflow = LayoutWorkflow::from_cli(&cli)?;

	if cli.list_languages {
		for name in workflow.languages()? {
			println!("{name}");
		}
		return Ok(());
	}

	let outcome = workflow.run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
