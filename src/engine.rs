use std::path::Path;

use minijinja::Environment;

/// Build an environment whose loader only searches `loader_dir`.
///
/// Trailing-newline preservation is switched on explicitly: the engine strips
/// a final line terminator by default, and the output must reproduce the
/// template source byte for byte around substitutions.
pub fn environment(loader_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(loader_dir));
    env.set_keep_trailing_newline(true);
    env
}
