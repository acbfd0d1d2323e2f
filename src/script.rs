/// Visualization script asset resolution
///
/// Finds the injectable Python script on disk. The rest of the crate treats
/// the result as an opaque path to splice into install commands.

use std::path::{Path, PathBuf};

/// File name of the injectable visualization script.
pub const SCRIPT_FILE: &str = "universal_vis.py";

/// Resolve the script's absolute location.
///
/// Order: an explicit override, the installed location in `resources/` next
/// to the running executable, then the development-tree fallback. The last
/// strategy always yields a path, even if the file is missing; installation
/// will then fail and be reported through the usual error path.
pub fn resolve_script_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    if let Some(installed) = installed_script_path() {
        if installed.is_file() {
            return installed;
        }
    }
    dev_script_path()
}

fn installed_script_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("resources").join(SCRIPT_FILE))
}

fn dev_script_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(SCRIPT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let explicit = Path::new("/custom/place/vis.py");
        assert_eq!(resolve_script_path(Some(explicit)), explicit);
    }

    #[test]
    fn test_fallback_points_at_resources() {
        let path = resolve_script_path(None);
        assert!(path.ends_with(Path::new("resources").join(SCRIPT_FILE)));
    }
}
