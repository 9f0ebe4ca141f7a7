use anyhow::{Result, bail};

use crate::templates;

pub fn run(project_type: &str) -> Result<()> {
    let body = templates::template_for(project_type);

    if body.is_empty() {
        bail!(
            "unknown project type '{project_type}' — expected one of: {}",
            templates::WORKFLOW_TYPES.join(", ")
        );
    }

    print!("{body}");
    Ok(())
}
