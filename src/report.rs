// Study report: the TOML template the user fills in and the typed record
// decoded from it. The backing file is a named temp file that is removed
// when the `ReportFile` is closed or dropped.

use crate::error::{Result, StudyError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Text written to a fresh report before the editor opens it.
pub const TEMPLATE: &str = r#"theme = ""
hour = 0
minute = 0
content = """

""""#;

/// One study session. Field order is the JSON field order sent to the API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StudyRecord {
    pub content: String,
    pub hour: i64,
    pub minute: i64,
    pub theme: String,
}

impl StudyRecord {
    /// Decode report text. Only structure and types are checked.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Read and decode the report at `path`.
pub fn decode(path: &Path) -> Result<StudyRecord> {
    let text = fs::read_to_string(path).map_err(StudyError::TempFile)?;
    StudyRecord::parse(&text)
}

/// A uniquely named temp file seeded with [`TEMPLATE`].
pub struct ReportFile {
    file: NamedTempFile,
}

impl ReportFile {
    pub fn create() -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("study-report")
            .suffix(".toml")
            .tempfile()
            .map_err(StudyError::TempFile)?;
        file.write_all(TEMPLATE.as_bytes())
            .and_then(|_| file.flush())
            .map_err(StudyError::TempFile)?;
        debug!("created report template at {}", file.path().display());
        Ok(ReportFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn decode(&self) -> Result<StudyRecord> {
        decode(self.path())
    }

    /// Remove the file now, reporting a failed removal.
    pub fn close(self) -> Result<()> {
        self.file.close().map_err(StudyError::TempFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_template_decodes_to_empty_record() {
        let record = StudyRecord::parse(TEMPLATE).unwrap();
        assert_eq!(record.theme, "");
        assert_eq!(record.hour, 0);
        assert_eq!(record.minute, 0);
        // The newline right after the opening quotes is trimmed.
        assert_eq!(record.content, "\n");
    }

    #[test]
    fn filled_report_decodes() {
        let text = r#"theme = "Go"
hour = 1
minute = 30
content = """notes""""#;
        let record = StudyRecord::parse(text).unwrap();
        assert_eq!(
            record,
            StudyRecord {
                content: "notes".into(),
                hour: 1,
                minute: 30,
                theme: "Go".into(),
            }
        );
    }

    #[test]
    fn multi_line_content_is_kept() {
        let text = "theme = \"Rust\"\nhour = 2\nminute = 0\ncontent = \"\"\"\nread chapter 4\nwrote tests\n\"\"\"\n";
        let record = StudyRecord::parse(text).unwrap();
        assert_eq!(record.content, "read chapter 4\nwrote tests\n");
    }

    #[test]
    fn values_are_not_range_checked() {
        let text = "theme = \"\"\nhour = -3\nminute = 600\n";
        let record = StudyRecord::parse(text).unwrap();
        assert_eq!(record.hour, -3);
        assert_eq!(record.minute, 600);
    }

    #[test]
    fn non_integer_hour_is_a_decode_error() {
        let text = "theme = \"Go\"\nhour = \"one\"\nminute = 0\n";
        assert!(matches!(
            StudyRecord::parse(text),
            Err(StudyError::Decode(_))
        ));
    }

    #[test]
    fn unterminated_content_is_a_decode_error() {
        let text = "theme = \"Go\"\ncontent = \"\"\"\nnotes\n";
        assert!(matches!(
            StudyRecord::parse(text),
            Err(StudyError::Decode(_))
        ));
    }

    #[test]
    fn report_file_starts_with_template_and_is_removed_on_close() {
        let report = ReportFile::create().unwrap();
        let path = report.path().to_path_buf();
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
        assert!(path.extension().is_some_and(|ext| ext == "toml"));

        report.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn report_file_is_removed_on_drop() {
        let path = {
            let report = ReportFile::create().unwrap();
            report.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
