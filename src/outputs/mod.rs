//! Report-side modules.
//!
//! # Submodules
//!
//! - [`report`]: buffers one run's groups and entries, then writes the
//!   `news_<timestamp>.md` report in a single pass
//! - [`seen`]: derives the deduplication set from every report a prior
//!   run left in the output directory
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── news_2025-05-06 08:30:00.md
//! ├── news_2025-05-06 19:12:44.md
//! └── ...
//! ```

pub mod report;
pub mod seen;
