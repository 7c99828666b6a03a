// Runs the user's text editor on a file and waits for it to exit. The editor
// shares our terminal, so the user drives it exactly as if they had started
// it themselves.

use crate::error::{Result, StudyError};
use log::debug;
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

pub const DEFAULT_EDITOR: &str = "vim";

/// Editor named by `$EDITOR`, or `vim` when it is unset or empty.
pub fn editor_command() -> String {
    resolve_editor(env::var("EDITOR").ok())
}

pub fn resolve_editor(value: Option<String>) -> String {
    match value {
        Some(editor) if !editor.is_empty() => editor,
        _ => DEFAULT_EDITOR.to_string(),
    }
}

/// Open `path` in `editor`, blocking until it exits. The editor value is
/// used as the program name as-is; `path` is its only argument.
pub fn launch(editor: &str, path: &Path) -> Result<()> {
    debug!("launching '{}' on {}", editor, path.display());
    let status = Command::new(editor)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| StudyError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(StudyError::EditorExit {
            editor: editor.to_string(),
            status,
        });
    }
    Ok(())
}
