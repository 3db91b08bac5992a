//! Document assembly.
//!
//! Turns the collected [`Record`]s into one LaTeX document: the static
//! preamble, a `\section` per distinct section label, a `\subsection` with an
//! `\lstinputlisting` per record, and the closing `\end{document}`.

use crate::options::{ListingPolicy, TexsheetOptions};
use crate::{Record, TexsheetError};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Document class, packages, colours and listing style, up to `\begin{document}`.
pub const PREAMBLE: &str = r#"\title{A Competitive Programming Cheat Sheet}

\documentclass[11pt,twocolumn,landscape]{article}

\usepackage{listings}
\usepackage[landscape,margin=0.5in]{geometry}
\usepackage[usenames,dvipsnames]{color}
\usepackage[utf8]{inputenc}
\author{23.15\% Mer Kräm}

\definecolor{comment-color}{rgb}{0.0,0.3,0.0} % Comment color
\definecolor{highlight}{RGB}{255,251,204} % Code highlight color
\definecolor{light-gray}{gray}{0.85}
\definecolor{background-color}{gray}{0.95}
\definecolor{string-color}{rgb}{0.05,0.6,0.0}
\definecolor{keyword-color}{RGB}{255,41,41}

\lstset{
language=C++,
basicstyle=\footnotesize,
backgroundcolor=\color{background-color},
commentstyle=\color{comment-color},
stringstyle=\color{string-color},
keywordstyle=\color{keyword-color},
}
\begin{document}
\maketitle
\clearpage

"#;

/// Last line of every document.
pub const CLOSING: &str = "\\end{document}\n";

/// Stable sort by section label; records without a label go last.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.sort_label().cmp(b.sort_label()));
}

/// Builds the full document text from the records of one walk.
pub fn render_document(mut records: Vec<Record>, options: &TexsheetOptions) -> String {
    sort_records(&mut records);
    let mut body = String::with_capacity(records.len() * 96);
    let mut current_section: Option<&str> = None;
    for record in &records {
        if current_section != Some(record.sort_label()) {
            let _ = write!(body, "\\section{{{}}}\n\n", record.section_label);
            current_section = Some(record.sort_label());
        }
        if is_listed(record, options) {
            let _ = writeln!(body, "\\subsection{{{}}}", record.display_name);
            let _ = write!(
                body,
                "\\lstinputlisting{{\"{}\"}}\n\n",
                record.path.display()
            );
        }
    }
    body.push_str(CLOSING);
    let mut out = String::with_capacity(options.preamble.len() + body.len());
    out.push_str(&options.preamble);
    out.push_str(&body);
    out
}

/// Renders the records and writes the document, replacing any existing file.
pub fn write_document_to_file(
    records: Vec<Record>,
    options: &TexsheetOptions,
    path: impl AsRef<Path>,
) -> Result<(), TexsheetError> {
    let content = render_document(records, options);
    fs::write(&path, content).map_err(|e| TexsheetError::io(path.as_ref(), e))?;
    Ok(())
}

fn is_listed(record: &Record, options: &TexsheetOptions) -> bool {
    match options.listing_policy {
        ListingPolicy::AllClassified => true,
        ListingPolicy::CodeOnly => record.is_code(&options.code_types),
    }
}
