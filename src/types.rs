use std::path::PathBuf;

pub const INPUT_PATH: &str = "html5kellycolorpicker.js";
pub const OUTPUT_PATH: &str = "html5kellycolorpicker.min.js";

/// Stage of a minify run, used to tag errors with where they happened.
#[derive(Copy, Clone, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
	Reading,
	Transforming,
	Writing,
}

/// Source and destination of a single minify run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinifyJob {
	pub input: PathBuf,
	pub output: PathBuf,
}

impl MinifyJob {
	pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
		Self {
			input: input.into(),
			output: output.into(),
		}
	}
}

impl Default for MinifyJob {
	fn default() -> Self {
		Self::new(INPUT_PATH, OUTPUT_PATH)
	}
}
