//! Suffix lookup tables mapping file names to a language label and
//! directory paths to a section label.

use serde::{Deserialize, Serialize};

/// One `suffix => label` entry of a [`SuffixTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub label: String,
}

/// An ordered table queried by suffix. The first rule whose suffix ends the
/// queried string wins; later rules are never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuffixTable {
    rules: Vec<SuffixRule>,
}

impl SuffixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Insertion order is lookup order.
    pub fn with(mut self, suffix: impl Into<String>, label: impl Into<String>) -> Self {
        self.rules.push(SuffixRule {
            suffix: suffix.into(),
            label: label.into(),
        });
        self
    }

    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| haystack.ends_with(rule.suffix.as_str()))
            .map(|rule| rule.label.as_str())
    }
}

impl<S: Into<String>, L: Into<String>> FromIterator<(S, L)> for SuffixTable {
    fn from_iter<I: IntoIterator<Item = (S, L)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SuffixTable::new(), |table, (s, l)| table.with(s, l))
    }
}

/// A [`SuffixTable`] with a fallback label, so every lookup yields a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTable {
    pub rules: SuffixTable,
    pub default_label: String,
}

impl SectionTable {
    pub fn lookup(&self, directory: &str) -> &str {
        self.rules
            .first_match(directory)
            .unwrap_or(self.default_label.as_str())
    }
}

impl Default for SectionTable {
    fn default() -> Self {
        Self {
            rules: [
                ("graphs", "Graph"),
                ("binary-search", "Binary Search"),
                ("disjoint-set", "Disjoint Set"),
                ("c++11", "C++11 Features"),
                ("fenwick", "Fenwick"),
                ("geometry", "Geometry"),
                ("math", "Math"),
                ("string", "String"),
            ]
            .into_iter()
            .collect(),
            default_label: "Other".to_string(),
        }
    }
}

/// The file-type table used when none is configured.
pub fn default_file_types() -> SuffixTable {
    [
        ("cpp", "C++"),
        ("md", "Markdown"),
        ("java", "Java"),
        ("py", "Python"),
    ]
    .into_iter()
    .collect()
}

/// Both lookups, borrowed from the options for the duration of a walk.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    file_types: &'a SuffixTable,
    sections: &'a SectionTable,
}

impl<'a> Classifier<'a> {
    pub fn new(file_types: &'a SuffixTable, sections: &'a SectionTable) -> Self {
        Self {
            file_types,
            sections,
        }
    }

    /// Language label for a file name, or `None` if no suffix matches.
    pub fn file_type(&self, file_name: &str) -> Option<&'a str> {
        self.file_types.first_match(file_name)
    }

    /// Section label for the path of a containing directory. Never absent.
    pub fn section(&self, directory: &str) -> &'a str {
        self.sections.lookup(directory)
    }
}
