// Shared helpers for the integration tests: shell-script editors and the
// location of the binary's config file under a scratch home directory.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable editor script into `dir`. The script stores the
/// path it was called with in the returned file, replaces the edited file
/// with `contents` and exits with `exit_code`.
#[cfg(unix)]
pub fn script_editor(dir: &Path, contents: &str, exit_code: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let seen = dir.join("editor-saw");
    let script = dir.join("fake-editor.sh");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$1\" > '{}'\ncat > \"$1\" <<'EOF'\n{}\nEOF\nexit {}\n",
            seen.display(),
            contents,
            exit_code
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    (script, seen)
}

pub fn editor_saw(seen: &Path) -> PathBuf {
    PathBuf::from(fs::read_to_string(seen).unwrap().trim())
}

/// Where the binary keeps its config when `HOME` (and `XDG_CONFIG_HOME`)
/// point into `home`.
pub fn config_path(home: &Path) -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support")
    } else {
        home.join(".config")
    };
    base.join("study-recorder").join("config.toml")
}

pub fn write_config(home: &Path, url: &str, token: &str) {
    let path = config_path(home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("url = \"{}\"\ntoken = \"{}\"\n", url, token)).unwrap();
}

pub const GO_REPORT: &str = "theme = \"Go\"\nhour = 1\nminute = 30\ncontent = \"\"\"notes\"\"\"";

pub fn go_json() -> serde_json::Value {
    serde_json::json!({ "content": "notes", "hour": 1, "minute": 30, "theme": "Go" })
}
