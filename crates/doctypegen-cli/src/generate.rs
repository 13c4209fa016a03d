//! Generate command implementation

use anyhow::Result;
use doctypegen_cli::codegen::{GenerateOptions, generate_source};
use doctypegen_cli::{Config, write_model};
use doctypegen_core::{DocTypeError, Document};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Arguments of `doctypegen generate`
pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub no_docs: bool,
}

/// Generate command implementation
pub fn run(args: &GenerateArgs, config: &Config) -> Result<()> {
    let document = doctypegen_core::load(&args.input).map_err(|e| describe(e, &args.input))?;
    log_modified(&document);

    let options = resolve_options(args, config);

    if args.stdout {
        let source = generate_source(&document, &options).map_err(|e| describe(e, &args.input))?;
        print!("{source}");
        return Ok(());
    }

    let destination = resolve_output_dir(args.output.as_deref(), config);
    write_model(&document, &destination, &options).map_err(|e| describe(e, &args.input))?;

    Ok(())
}

/// Output directory: `--output`, then the config file, then `./models`
fn resolve_output_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.dir.clone())
}

fn resolve_options(args: &GenerateArgs, config: &Config) -> GenerateOptions {
    let mut options = config.generate_options();
    if args.no_docs {
        options.doc_comments = false;
    }
    options
}

fn log_modified(document: &Document) {
    match document.doctype.modified_at() {
        Ok(modified) => debug!(doctype = %document.name(), %modified, "DocType last modified"),
        Err(e) => warn!(doctype = %document.name(), error = %e, "ignoring modified timestamp"),
    }
}

/// Wrap an error with its kind and the input it came from
pub(crate) fn describe(err: DocTypeError, input: &Path) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(format!("{kind} processing {}", input.display()))
}
