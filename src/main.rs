mod types;
mod minify;

use clap::Parser;
use color_print::*;

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() {
	let _ = Cli::parse();

	if let Err(err) = minify::run() {
		ceprintln!("<r!><s>Error:</></> {:#}", err);
		std::process::exit(1); // general error
	}
}
