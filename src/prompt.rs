use std::io;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// The two blocking prompts the guided flow needs, kept behind a trait so the
/// flow can run against a scripted implementation in tests.
pub trait Prompt {
    /// Single-select over `options`; `Ok(None)` means the operator dismissed
    /// the prompt without choosing.
    fn select(&self, prompt: &str, options: &[&str]) -> Result<Option<usize>>;

    /// Free-text input. Blank values are rejected inline and never returned;
    /// `Ok(None)` means the operator dismissed the prompt.
    fn input(&self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal-backed prompts.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&self, prompt: &str, options: &[&str]) -> Result<Option<usize>> {
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt();
        cancel_to_none(picked)
    }

    fn input(&self, prompt: &str) -> Result<Option<String>> {
        let entered = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .validate_with(|value: &String| -> Result<(), &str> {
                if value.trim().is_empty() { Err("Workflow name cannot be empty") } else { Ok(()) }
            })
            .interact_text()
            .map(Some);
        cancel_to_none(entered)
    }
}

// Ctrl-C surfaces as an interrupted IO error from the prompt; treat it the
// same as an Esc dismissal, not a failure.
fn cancel_to_none<T>(result: Result<Option<T>, dialoguer::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}
