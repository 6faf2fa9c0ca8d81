// Interactive helpers used with `--interactive`: prompts for missing photo
// metadata via `dialoguer` and a spinner via `indicatif` while uploading.

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Ask for whichever of `title` / `description` is still empty. Values
/// already given on the command line are kept as they are.
pub fn prompt_missing_metadata(title: &mut String, description: &mut String) -> Result<()> {
    if title.is_empty() {
        // `allow_empty` so the user can just press Enter to skip.
        *title = Input::new()
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?;
    }
    if description.is_empty() {
        *description = Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;
    }
    Ok(())
}

/// Spinner on stderr. Call `finish_and_clear` when the work is done so no
/// output is left behind.
pub fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
