// Library root
// -----------
// The binary (`main.rs`) parses arguments and hands off to these modules.
//
// Module responsibilities:
// - `config`: the persisted API URL and token, and editing them.
// - `editor`: running `$EDITOR` on a file with the terminal attached.
// - `report`: the report template, its temp file and the decoded record.
// - `api`: posting a record to the backend.
// - `commands`: the `add` and `config` flows built from the above.
pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod report;

pub use config::{Config, ConfigStore};
pub use error::{Result, StudyError};
pub use report::StudyRecord;
