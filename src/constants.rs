//! Common constants used throughout cookcut.

/// Data input directory used when `--input-dir` is not given
pub const DEFAULT_INPUT_DIR: &str = "CSVs";

/// Output directory used when `--output-dir` is not given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Template directory used when `--template-dir` is not given
pub const DEFAULT_TEMPLATE_DIR: &str = ".cc";

/// Render engine executable used when `--renderer` is not given
pub const DEFAULT_RENDERER: &str = "cookiecutter";

/// File the render engine reads its variables from, inside the template directory
pub const CONTEXT_FILE: &str = "cookiecutter.json";

/// Files matching these globs are copied by the render engine without substitution.
/// Jinja templates shipped inside the generated project must survive untouched.
pub const DEFAULT_COPY_WITHOUT_RENDER: [&str; 1] = ["*.j2"];

/// CSV column naming the variable a row defines
pub const RESERVED_KEY_COLUMN: &str = "__CCkey";

/// CSV column holding the value of the variable a row defines
pub const RESERVED_VALUE_COLUMN: &str = "__CCvalue";
