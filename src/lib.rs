//! # Texsheet
//!
//! `texsheet` walks a directory of code snippets and typesets them into a single LaTeX
//! document: one `\section` per snippet category, one `\subsection` and
//! `\lstinputlisting` per file.
//!
//! A file is included when its name ends with a configured type suffix (`cpp`, `md`,
//! `java`, `py` by default). Its section comes from the path of the directory holding
//! it (`graphs` → `Graph`, ...), falling back to `Other`. Directories whose path ends
//! with `test` are skipped entirely.
//!
//! # Features
//!
//! - `parallel`: Reads classified files in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use texsheet::{ListingPolicy, TexsheetBuilder, generate_to_file};
//!
//! let options = TexsheetBuilder::new("code")
//!     .listing_policy(ListingPolicy::CodeOnly)
//!     .ignore_patterns(vec!["**/scratch/**".into()])
//!     .build();
//!
//! generate_to_file(&options, "cheatsheet.tex").expect("Failed to build cheat sheet");
//! ```

pub mod classify;
mod engine;
mod error;
mod escape;
mod options;
pub mod output;
mod types;

pub use classify::{Classifier, SectionTable, SuffixRule, SuffixTable};
pub use engine::{collect_records, generate, generate_to_file};
pub use error::TexsheetError;
pub use escape::latexify;
pub use options::{ListingPolicy, TexsheetBuilder, TexsheetOptions};
pub use output::render_document;
pub use types::{MISSING_SECTION_LABEL, Record};
