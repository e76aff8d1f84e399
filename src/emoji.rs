//! Strip emoji from markdown documents.

use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Code point ranges removed from documents:
/// emoticons, misc symbols and pictographs, transport and map symbols,
/// misc symbols, dingbats, variation selector-16, supplemental symbols and
/// pictographs, regional indicators (flags).
const EMOJI_CLASS: &str = concat!(
    "[",
    r"\x{1F600}-\x{1F64F}",
    r"\x{1F300}-\x{1F5FF}",
    r"\x{1F680}-\x{1F6FF}",
    r"\x{2600}-\x{26FF}",
    r"\x{2700}-\x{27BF}",
    r"\x{FE0F}",
    r"\x{1F900}-\x{1F9FF}",
    r"\x{1F1E6}-\x{1F1FF}",
    "]+"
);

fn emoji_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMOJI_CLASS).expect("emoji pattern is valid"))
}

/// Remove emoji characters from `text`.
pub fn strip_text(text: &str) -> String {
    emoji_pattern().replace_all(text, "").into_owned()
}

/// Files touched by one stripping pass.
#[derive(Debug, Default)]
pub struct StripSummary {
    pub modified: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl StripSummary {
    pub fn count(&self) -> usize {
        self.modified.len()
    }
}

/// Recursively strip emoji from every `.md` file under `dir`.
///
/// Files are only rewritten when their content changes. Unreadable files are
/// logged and recorded in the summary; the walk continues.
pub fn strip(dir: &Path) -> Result<StripSummary> {
    if !dir.is_dir() {
        return Err(crate::error::RegistryError::NotFound(dir.to_path_buf()));
    }

    let mut summary = StripSummary::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                summary.failed.push((path, e.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        match strip_file(entry.path()) {
            Ok(true) => {
                tracing::debug!(path = %entry.path().display(), "cleaned");
                summary.modified.push(entry.into_path());
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "error processing file");
                summary.failed.push((entry.into_path(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Returns whether the file was rewritten.
fn strip_file(path: &Path) -> std::io::Result<bool> {
    let content = std::fs::read_to_string(path)?;
    let cleaned = strip_text(&content);
    if cleaned == content {
        return Ok(false);
    }
    std::fs::write(path, cleaned)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_text_ranges() {
        assert_eq!(strip_text("Launch \u{1F680} now"), "Launch  now");
        assert_eq!(strip_text("\u{2705} Done"), " Done");
        assert_eq!(strip_text("Sun \u{2600}\u{FE0F}!"), "Sun !");
        assert_eq!(strip_text("\u{1F1FA}\u{1F1F8} flag"), " flag");
        assert_eq!(strip_text("\u{1F916} Agent \u{1F9E0}"), " Agent ");
    }

    #[test]
    fn test_strip_text_keeps_other_symbols() {
        let text = "Arrows → and ± stay, © too, 日本語";
        assert_eq!(strip_text(text), text);
        assert_eq!(strip_text("plain ascii"), "plain ascii");
        // U+2713 (check mark) sits inside the dingbats block.
        assert_eq!(strip_text("✓ done"), " done");
    }

    #[test]
    fn test_strip_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.md"), "# Title \u{1F389}\n").unwrap();
        fs::write(dir.path().join("nested/b.md"), "clean text\n").unwrap();
        fs::write(dir.path().join("nested/c.md"), "\u{1F525} hot\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "\u{1F525} ignored\n").unwrap();

        let first = strip(dir.path()).unwrap();
        let mut modified: Vec<PathBuf> = first.modified.clone();
        modified.sort();
        assert_eq!(
            modified,
            vec![dir.path().join("a.md"), dir.path().join("nested/c.md")]
        );
        assert_eq!(fs::read_to_string(dir.path().join("a.md")).unwrap(), "# Title \n");
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "\u{1F525} ignored\n"
        );

        let second = strip(dir.path()).unwrap();
        assert_eq!(second.count(), 0);
    }

    #[test]
    fn test_strip_continues_after_bad_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a_bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("b_good.md"), "ok \u{1F44D}\n").unwrap();

        let summary = strip(dir.path()).unwrap();
        assert_eq!(summary.count(), 1);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].0.ends_with("a_bad.md"));
    }

    #[test]
    fn test_strip_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(strip(&dir.path().join("missing")).is_err());
    }
}
