//! CLI command implementations.
//!
//! - `exists`: Report existence and directory-ness of a path
//! - `is_file` / `is_dir` / `has_size`: Predicates that set the exit code
//! - `resolve`: Print a path with symlinks resolved
//! - `clean`: Split and clean a delimited path list
//! - `completions`: Generate shell completion scripts

pub mod clean;
pub mod completions;
pub mod exists;
pub mod has_size;
pub mod is_dir;
pub mod is_file;
pub mod resolve;

pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use exists::ExistsCommand;
pub use has_size::HasSizeCommand;
pub use is_dir::IsDirCommand;
pub use is_file::IsFileCommand;
pub use resolve::ResolveCommand;
