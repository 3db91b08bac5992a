use crate::classify::{SectionTable, SuffixTable, default_file_types};
use crate::error::TexsheetError;
use crate::output::PREAMBLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
/// Which classified records get a listing in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingPolicy {
    /// Every record gets a listing, whatever its language.
    #[default]
    AllClassified,
    /// Only records whose type is one of `code_types`.
    CodeOnly,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TexsheetOptions {
    pub root: PathBuf,
    pub excluded_dir_suffix: String,
    pub file_types: SuffixTable,
    pub sections: SectionTable,
    pub listing_policy: ListingPolicy,
    pub code_types: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub preamble: String,
}
impl Default for TexsheetOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("code"),
            excluded_dir_suffix: "test".to_string(),
            file_types: default_file_types(),
            sections: SectionTable::default(),
            listing_policy: ListingPolicy::AllClassified,
            code_types: vec!["C++".into(), "Java".into(), "Python".into()],
            ignore_patterns: Vec::new(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            preamble: PREAMBLE.to_string(),
        }
    }
}
impl TexsheetOptions {
    /// Reads options from a JSON file. Keys missing from the file keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TexsheetError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| TexsheetError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| TexsheetError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
#[derive(Debug, Default)]
pub struct TexsheetBuilder {
    options: TexsheetOptions,
}
impl TexsheetBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_options(TexsheetOptions {
            root: root.into(),
            ..Default::default()
        })
    }
    pub fn from_options(options: TexsheetOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn excluded_dir_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options.excluded_dir_suffix = suffix.into();
        self
    }
    pub fn file_types(mut self, table: SuffixTable) -> Self {
        self.options.file_types = table;
        self
    }
    pub fn sections(mut self, table: SectionTable) -> Self {
        self.options.sections = table;
        self
    }
    pub fn listing_policy(mut self, policy: ListingPolicy) -> Self {
        self.options.listing_policy = policy;
        self
    }
    pub fn code_types(mut self, types: Vec<String>) -> Self {
        self.options.code_types = types;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.options.preamble = preamble.into();
        self
    }
    pub fn build(self) -> TexsheetOptions {
        self.options
    }
}
