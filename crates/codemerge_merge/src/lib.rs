//! Merge source files into a single text blob.
//!
//! This crate walks a project for files with selected extensions (or takes an
//! explicit list), concatenates them behind `// relative/path` headers and
//! hands the result to a [`Publisher`], usually the system clipboard.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use codemerge_core::DiskFs;
//! use codemerge_merge::{ClipboardPublisher, Config, Publisher, run_merge};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["codemerge", "web", "--ext", ".ts", ".tsx"]);
//! let cwd = std::env::current_dir()?;
//!
//! let outcome = run_merge(&cfg, &DiskFs, &cwd)?;
//! ClipboardPublisher.publish(&outcome.text)?;
//! println!("merged {} files", outcome.files.len());
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod merger;
mod publish;
mod reporter;
mod runner;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_files, resolve_explicit_files};
pub use config::Config;
pub use merger::{MergeOptions, display_header, merge_to_string};
pub use publish::{
    CLIPBOARD_OWNER_ENV, ClipboardPublisher, Publisher, WriterPublisher, serve_clipboard_from_stdin,
};
pub use reporter::{print_merge_summary, print_no_files_message};
pub use runner::run_merge;
pub use types::{MergeMode, MergeOutcome};
