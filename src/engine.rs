use crate::classify::Classifier;
use crate::error::TexsheetError;
use crate::escape::latexify;
use crate::options::TexsheetOptions;
use crate::output::{render_document, write_document_to_file};
use crate::types::Record;
use ignore::{DirEntry, WalkBuilder};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &TexsheetOptions) -> Result<Self, TexsheetError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    TexsheetError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(
                glob_builder
                    .build()
                    .map_err(|e| TexsheetError::Walk(format!("Failed to build glob set: {}", e)))?,
            )
        } else {
            None
        };
        let excluded_suffix = options.excluded_dir_suffix.clone();
        builder.filter_entry(move |entry| {
            if is_excluded_dir(entry, &excluded_suffix) {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruning directory: {}", entry.path().display());
                return false;
            }
            matcher
                .as_ref()
                .is_none_or(|matcher| !matcher.is_match(entry.path()))
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_files(self) -> impl Iterator<Item = Result<PathBuf, TexsheetError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(TexsheetError::Walk(e.to_string()))),
        })
    }
}
/// Directories below the root whose path ends with the excluded suffix are
/// skipped along with everything beneath them.
fn is_excluded_dir(entry: &DirEntry, suffix: &str) -> bool {
    !suffix.is_empty()
        && entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && entry.path().to_string_lossy().ends_with(suffix)
}
fn read_file_lines(path: &Path) -> Result<Vec<String>, TexsheetError> {
    let bytes = fs::read(path).map_err(|e| TexsheetError::io(path, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| TexsheetError::io(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(split_lines(&text).map(|line| latexify(&line)).collect())
}
/// Splits text into lines that keep their terminator, with `\r\n` and a
/// lone `\r` both read as `\n`.
fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            let line = rest.to_string();
            rest = "";
            return Some(line);
        };
        let mut line = rest[..end].to_string();
        line.push('\n');
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
    })
}
/// Reads a walked file, then classifies it. Files whose name matches no
/// type yield `None`; read failures are returned whether or not the file
/// would have classified.
fn read_record(
    path: PathBuf,
    classifier: &Classifier<'_>,
) -> Result<Option<Record>, TexsheetError> {
    let content = read_file_lines(&path)?;
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(None),
    };
    let directory = path
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(file_type) = classifier.file_type(&file_name) else {
        #[cfg(feature = "logging")]
        tracing::trace!("Unclassified file skipped: {}", path.display());
        return Ok(None);
    };
    let section = classifier.section(&directory);
    Ok(Some(Record {
        display_name: latexify(&file_name),
        content,
        display_type: latexify(file_type),
        section_label: latexify(section),
        path,
    }))
}
/// Walks `options.root`, reads every file, and appends a [`Record`] for each
/// one that matches both the file-type and the section table.
///
/// Files without a matching type are skipped silently. Any I/O failure,
/// including on a file that would not have matched, aborts the walk and
/// leaves `records` untouched.
pub fn collect_records(
    options: &TexsheetOptions,
    records: &mut Vec<Record>,
) -> Result<(), TexsheetError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Collecting records under: {}", options.root.display());
    let classifier = Classifier::new(&options.file_types, &options.sections);
    let paths = Walker::new(options)?
        .into_files()
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let read = paths
        .into_iter()
        .map(|path| read_record(path, &classifier))
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "parallel")]
    let read = paths
        .into_par_iter()
        .map(|path| read_record(path, &classifier))
        .collect::<Result<Vec<_>, _>>()?;
    records.extend(read.into_iter().flatten());
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} records", records.len());
    Ok(())
}
/// Walks the tree and returns the rendered document.
pub fn generate(options: &TexsheetOptions) -> Result<String, TexsheetError> {
    let mut records = Vec::new();
    collect_records(options, &mut records)?;
    let document = render_document(records, options);
    #[cfg(feature = "logging")]
    tracing::debug!("Rendered document of {} bytes", document.len());
    Ok(document)
}
/// Walks the tree and writes the document to `output`, creating or truncating it.
///
/// Nothing is written if the walk fails.
pub fn generate_to_file(
    options: &TexsheetOptions,
    output: impl AsRef<Path>,
) -> Result<(), TexsheetError> {
    let mut records = Vec::new();
    collect_records(options, &mut records)?;
    write_document_to_file(records, options, output)
}
