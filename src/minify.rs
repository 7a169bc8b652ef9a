use crate::types::*;
use std::fs::{read_to_string, write};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::minifier::{Minifier as OxcMinifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Anything that turns JavaScript source into smaller, equivalent JavaScript.
pub trait Minifier {
	fn minify(&self, source: &str) -> Result<String>;
}

/// Minifier backed by the oxc parser, minifier and codegen.
pub struct JsMinifier;

impl Minifier for JsMinifier {
	fn minify(&self, source: &str) -> Result<String> {
		let allocator = Allocator::default();

		// the picker is a classic browser script, so its top-level names are globals and keep their names
		let source_type = SourceType::default().with_script(true);
		let mut parsed = Parser::new(&allocator, source, source_type).parse();

		if parsed.panicked || !parsed.errors.is_empty() {
			let first_error = parsed.errors
				.first()
				.map(|e| e.to_string())
				.unwrap_or_else(|| "parser panicked".to_string());

			return Err(anyhow!(first_error));
		}

		let minified = OxcMinifier::new(MinifierOptions::default())
			.minify(&allocator, &mut parsed.program);

		let code = Codegen::new()
			.with_options(CodegenOptions {
				minify: true,
				comments: CommentOptions::disabled(),
				..CodegenOptions::default()
			})
			.with_scoping(minified.scoping)
			.build(&parsed.program)
			.code;

		Ok(code)
	}
}

/// Minify the fixed input file into the fixed output file.
pub fn run() -> Result<()> {
	run_job(&MinifyJob::default(), &JsMinifier)
}

pub fn run_job(job: &MinifyJob, minifier: &impl Minifier) -> Result<()> {
	let source = read_to_string(&job.input)
		.with_context(|| failed(Step::Reading, &job.input))?;

	// engines treat a leading byte-order mark as whitespace
	let source = source.strip_prefix('\u{feff}').unwrap_or(&source);

	let minified = minifier.minify(source)
		.with_context(|| failed(Step::Transforming, &job.input))?;

	// output is only touched once the minified text exists
	write(&job.output, minified)
		.with_context(|| failed(Step::Writing, &job.output))
}

fn failed(step: Step, path: &Path) -> String {
	format!("Failed while {} \"{}\"", step, path.display())
}
