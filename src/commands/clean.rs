use crate::error::Result;
use crate::registry::Registry;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Interpreter cache directories left behind by helper scripts.
const CACHE_DIRS: &[&str] = &["__pycache__"];

/// Interpreter cache file extensions.
const CACHE_EXTENSIONS: &[&str] = &["pyc"];

pub fn execute(registry: &Registry) -> Result<()> {
    println!("Cleaning build artifacts...");
    let removed = clean(registry)?;

    for path in &removed {
        let shown = path.strip_prefix(registry.layout().root()).unwrap_or(path);
        println!("Removed {}", shown.display());
    }
    println!("Removed {} items", removed.len());
    Ok(())
}

/// Remove the report output directory, interpreter caches and `.bak` files
/// under the agents directory. Returns what was removed.
pub fn clean(registry: &Registry) -> Result<Vec<PathBuf>> {
    let layout = registry.layout();
    let mut removed = Vec::new();

    if layout.dist_dir().exists() {
        std::fs::remove_dir_all(layout.dist_dir())?;
        removed.push(layout.dist_dir().to_path_buf());
    }

    let mut cache_dirs = Vec::new();
    let mut files = Vec::new();
    let walker = WalkDir::new(layout.root())
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || (e.file_name() != ".git" && e.file_name() != "target"));
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if entry.file_type().is_dir() && is_cache_dir(path) {
            cache_dirs.push(path.to_path_buf());
        } else if entry.file_type().is_file()
            && (is_cache_file(path) || is_backup(path, layout.agents_dir()))
        {
            files.push(path.to_path_buf());
        }
    }

    for file in files {
        // Files inside a cache dir go away with the directory.
        if cache_dirs.iter().any(|d| file.starts_with(d)) {
            continue;
        }
        std::fs::remove_file(&file)?;
        tracing::debug!(path = %file.display(), "removed file");
        removed.push(file);
    }

    for dir in cache_dirs {
        // Nested cache dirs may already be gone with their parent.
        if dir.exists() {
            std::fs::remove_dir_all(&dir)?;
            tracing::debug!(path = %dir.display(), "removed directory");
            removed.push(dir);
        }
    }

    Ok(removed)
}

fn is_cache_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| CACHE_DIRS.contains(&n))
}

fn is_cache_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CACHE_EXTENSIONS.contains(&e))
}

fn is_backup(path: &Path, agents_dir: &Path) -> bool {
    path.starts_with(agents_dir) && path.extension().is_some_and(|e| e == "bak")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn test_clean_removes_artifacts() {
        let fx = Fixture::new();
        fx.write("dist/index.html", "<html></html>");
        fx.write("agents/AGENTS.svc.md.20240601_120000.bak", "old");
        fx.write("tools/__pycache__/x.cpython-312.pyc", "");
        fx.write("tools/helper.pyc", "");
        fx.write("notes/keep.bak", "not under agents");

        let removed = clean(&fx.registry).unwrap();

        assert_eq!(removed.len(), 4);
        assert!(!fx.path("dist").exists());
        assert!(!fx.path("agents/AGENTS.svc.md.20240601_120000.bak").exists());
        assert!(!fx.path("tools/__pycache__").exists());
        assert!(!fx.path("tools/helper.pyc").exists());
        assert!(fx.path("notes/keep.bak").exists());
        assert!(fx.path("agents/AGENTS.svc.md").exists());
    }

    #[test]
    fn test_clean_on_clean_tree() {
        let fx = Fixture::new();
        let removed = clean(&fx.registry).unwrap();
        assert!(removed.is_empty());
    }
}
