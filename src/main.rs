use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use workflow_gen::commands;
use workflow_gen::prompt::TerminalPrompt;

#[derive(Parser)]
#[command(version, about = "Guided generator for GitHub Actions workflow files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a project type and write its workflow file into .github/workflows
    New {
        /// Project type, e.g. "Python" (skips the picker)
        #[arg(short = 't', long)]
        project_type: Option<String>,
        /// Workflow file name, e.g. ci.yml (skips the prompt)
        #[arg(short, long)]
        name: Option<String>,
        /// Workspace root to write into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// List the available project types
    List,
    /// Print a project type's workflow template to stdout
    Preview {
        /// Project type, e.g. "Static Website"
        project_type: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::New { project_type, name, dir } => {
            commands::new::run(&TerminalPrompt, &dir, project_type.as_deref(), name.as_deref())?;
            Ok(())
        }
        Command::List => {
            commands::list::run();
            Ok(())
        }
        Command::Preview { project_type } => commands::preview::run(&project_type),
    }
}
