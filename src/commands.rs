// Command flows: `add` walks the user through the report template and
// submits it, `config` opens the config file for editing. Both take their
// inputs as arguments; nothing here reads global state.

use crate::api::ApiClient;
use crate::config::{Config, ConfigStore};
use crate::editor;
use crate::error::{Result, StudyError};
use crate::report::{ReportFile, StudyRecord};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Let the user fill in a fresh report in `editor`. The temp file is gone
/// when this returns, whatever the outcome.
pub fn record_study(editor: &str) -> Result<StudyRecord> {
    let report = ReportFile::create()?;
    let decoded = editor::launch(editor, report.path()).and_then(|_| report.decode());
    let closed = report.close();
    let record = decoded?;
    closed?;
    Ok(record)
}

/// Full add flow: edit, decode, submit, then print the response body.
pub fn add_study(config: &Config, editor: &str, out: &mut impl Write) -> Result<()> {
    let record = record_study(editor)?;
    let api = ApiClient::new(config)?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Submitting...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let body = api.submit(&record);
    spinner.finish_and_clear();

    let body = body?;
    writeln!(out, "result: {}", body).map_err(StudyError::Output)?;
    Ok(())
}

/// Open the persisted config in `editor`.
pub fn edit_config(store: &ConfigStore, editor: &str) -> Result<()> {
    store.edit(editor)
}
