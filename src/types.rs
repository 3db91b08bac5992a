use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Label that sorts after every real section.
pub const MISSING_SECTION_LABEL: &str = "ZZZ";

/// One classified source file, ready to be typeset.
///
/// Every text field except `path` is already escaped with
/// [`latexify`](crate::latexify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Escaped file name, used as the subsection title.
    pub display_name: String,
    /// Escaped lines of the file, terminators included.
    pub content: Vec<String>,
    /// Escaped language label, e.g. `C++`.
    pub display_type: String,
    /// Escaped section label, e.g. `Graph`.
    pub section_label: String,
    /// Path as walked, unescaped. Only ever emitted inside an inclusion directive.
    pub path: PathBuf,
}

impl Record {
    pub fn sort_label(&self) -> &str {
        if self.section_label.is_empty() {
            MISSING_SECTION_LABEL
        } else {
            &self.section_label
        }
    }

    pub fn is_code(&self, code_types: &[String]) -> bool {
        code_types.iter().any(|t| *t == self.display_type)
    }
}
