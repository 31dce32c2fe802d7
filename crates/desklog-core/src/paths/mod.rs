//! Log directory discovery
//!
//! - `CandidatePath` / `Probe`: one fallback option and how it is checked
//! - `DirectoryResolver`: per-platform candidate chains

mod probe;
mod resolver;

pub use probe::{check_writable, create_dir_tree, first_writable, CandidatePath, FsProbe, Probe};
pub use resolver::{DirectoryResolver, Environment, Platform};
