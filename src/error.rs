// Error types shared by every module of the library. Each variant maps to
// one stage of the pipeline so the binary can report where a run stopped.
// Messages leave the underlying cause to `source()`; the binary prints the
// whole chain.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("could not determine the user config directory")]
    ConfigDir,

    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to save config {}", path.display())]
    ConfigSave {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode config")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("temporary report file")]
    TempFile(#[source] std::io::Error),

    #[error("failed to launch editor '{editor}'")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },

    #[error("editor '{editor}' exited unsuccessfully ({status})")]
    EditorExit { editor: String, status: ExitStatus },

    #[error("failed to decode study report")]
    Decode(#[from] toml::de::Error),

    #[error("request to {url} failed")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to encode study")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;
