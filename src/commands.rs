use std::fs;

use anyhow::Context as _;
use minijinja::ErrorKind;
use minijinja::value::Value;

use crate::cli::Cli;
use crate::context;
use crate::engine;
use crate::failure::Failure;
use crate::resolve;

/// Resolve, render, and write in one pass.
///
/// The raw existence check runs before the engine is built so that a missing
/// file is reported with the exact joined path instead of an engine-internal
/// lookup failure. The output file is only touched after rendering has fully
/// succeeded.
pub fn run(cli: Cli) -> Result<(), Failure> {
    let location = resolve::resolve(&cli.template);
    let joined = location.joined();
    if !joined.exists() {
        return Err(Failure::MissingTemplate(joined));
    }

    let bindings = context::build(&cli.assignments);
    let env = engine::environment(&location.loader_dir);
    let template = match env.get_template(&location.name) {
        Ok(template) => template,
        Err(err) if matches!(err.kind(), ErrorKind::TemplateNotFound) => {
            return Err(Failure::EngineLookup {
                name: location.name,
                loader_dir: location.loader_dir.display().to_string(),
            });
        }
        Err(err) => return Err(Failure::from(anyhow::Error::from(err))),
    };

    let rendered = template
        .render(Value::from_serialize(&bindings))
        .map_err(anyhow::Error::from)?;

    fs::write(&cli.out_file, rendered)
        .with_context(|| format!("failed to write {}", cli.out_file))?;

    Ok(())
}
