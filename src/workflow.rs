use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Target path for a workflow file: `<root>/.github/workflows/<name>`.
pub fn workflow_path(root: &Path, name: &str) -> PathBuf {
    root.join(".github").join("workflows").join(name)
}

/// Writes `content` as the complete contents of the workflow file, creating
/// missing parent directories and truncating any existing file.
pub fn write_workflow(root: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = workflow_path(root, name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(&path, content)
        .with_context(|| format!("failed to write workflow file {}", path.display()))?;

    Ok(path)
}
