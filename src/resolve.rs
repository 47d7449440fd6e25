use std::path::{Path, PathBuf};

/// Where the engine should look for a template: the directory its loader is
/// scoped to, plus the name used to look the template up inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub loader_dir: PathBuf,
    pub name: String,
}

impl Location {
    /// The concrete filesystem path the pair points at.
    pub fn joined(&self) -> PathBuf {
        self.loader_dir.join(&self.name)
    }
}

/// Split a template path into a loader directory and a template name.
///
/// A path with a directory component (or an absolute path) scopes the loader
/// to that directory and keeps the final component as the name. A bare
/// filename is looked up in `.` unchanged, so `page.html` and `./page.html`
/// resolve to the same location.
pub fn resolve(template_path: &str) -> Location {
    let path = Path::new(template_path);
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());

    match parent {
        Some(dir) => Location {
            loader_dir: dir.to_path_buf(),
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        },
        None => Location {
            loader_dir: PathBuf::from("."),
            name: template_path.to_string(),
        },
    }
}
