use crate::emoji;
use crate::error::Result;
use std::path::PathBuf;

/// Strip emoji from markdown under each directory. Missing directories are skipped.
pub fn execute(directories: &[PathBuf]) -> Result<()> {
    let mut count = 0;

    for dir in directories {
        if !dir.is_dir() {
            println!("Skipping non-existent directory: {}", dir.display());
            continue;
        }

        let summary = emoji::strip(dir)?;
        for path in &summary.modified {
            println!("cleaned: {}", path.display());
        }
        for (path, error) in &summary.failed {
            println!("error processing {}: {}", path.display(), error);
        }
        count += summary.count();
    }

    println!();
    println!("Cleaned emojis from {} files.", count);
    Ok(())
}
