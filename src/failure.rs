use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a render, with the exit code each case maps to.
///
/// Usage, missing-file, and engine-lookup failures carry fixed message text
/// and their own exit codes; anything else (render errors, output I/O) passes
/// through with the underlying message and the generic failure code.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("Usage: render_jinja.py <template> <out_file> key=val ...")]
    Usage,
    #[error("Template not found: {}", .0.display())]
    MissingTemplate(PathBuf),
    #[error("TemplateNotFound: {name} (loader_dir={loader_dir})")]
    EngineLookup { name: String, loader_dir: String },
    #[error(transparent)]
    Fatal(#[from] anyhow::Error),
}

impl Failure {
    pub fn exit_code(&self) -> i32 {
        match self {
            Failure::Usage | Failure::Fatal(_) => 1,
            Failure::MissingTemplate(_) => 2,
            Failure::EngineLookup { .. } => 3,
        }
    }
}
