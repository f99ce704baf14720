//! ASCII directory trees.
//!
//! Prints a directory and everything below it with `├──` / `└──` connectors,
//! directories first, skipping ignored names such as `node_modules`.
//!
//! ```text
//! .
//! ├── app
//! │   └── page.tsx
//! └── package.json
//! ```

mod config;
mod printer;
mod reporter;
mod runner;

// Re-export public API
pub use config::Config;
pub use printer::{TreeOptions, TreeStats, print_tree};
pub use reporter::print_tree_summary;
pub use runner::run_tree;
