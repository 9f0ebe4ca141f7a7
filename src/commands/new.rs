use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::prompt::Prompt;
use crate::{templates, workflow};

pub const TYPE_PROMPT: &str = "Select the type of project";
pub const NAME_PROMPT: &str = "Enter the name for your workflow (e.g., ci.yml, test.yml)";

/// The guided flow: collect a project type and a file name, then write the
/// matching template under `<dir>/.github/workflows/`.
///
/// `project_type` and `name` skip the corresponding prompt when given.
pub fn run(
    prompt: &dyn Prompt,
    dir: &Path,
    project_type: Option<&str>,
    name: Option<&str>,
) -> Result<PathBuf> {
    if !dir.is_dir() {
        bail!("workspace directory '{}' does not exist", dir.display());
    }

    println!("Creating GitHub workflow...");

    let project_type = match project_type {
        Some(label) => {
            if !templates::WORKFLOW_TYPES.contains(&label) {
                bail!(
                    "unknown project type '{label}' — expected one of: {}",
                    templates::WORKFLOW_TYPES.join(", ")
                );
            }
            label.to_string()
        }
        None => match prompt.select(TYPE_PROMPT, &templates::WORKFLOW_TYPES)? {
            Some(index) => templates::WORKFLOW_TYPES[index].to_string(),
            None => bail!("No project type selected."),
        },
    };

    let name = match name {
        Some(value) => {
            if value.trim().is_empty() {
                bail!("Workflow name cannot be empty");
            }
            value.to_string()
        }
        None => match prompt.input(NAME_PROMPT)? {
            Some(value) => value,
            None => bail!("Workflow name is required."),
        },
    };

    let content = templates::template_for(&project_type);
    let path = workflow::write_workflow(dir, &name, content)?;

    println!("Workflow file created successfully: {}", path.display());

    Ok(path)
}
