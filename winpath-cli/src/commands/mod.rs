//! CLI command implementations.
//!
//! - `convert`: Convert a portable path into a Windows path
//! - `compare`: Compare two paths ignoring case and separators
//! - `absolute`: Make a path absolute against the current directory
//! - `short`: Resolve the short (8.3) form of a path
//! - `split`: Split a path into parent and leaf
//! - `classify`: Report the classification predicates of a path
//! - `completions`: Generate shell completion scripts

pub mod absolute;
pub mod classify;
pub mod compare;
pub mod completions;
pub mod convert;
pub mod short;
pub mod split;

pub use absolute::AbsoluteCommand;
pub use classify::ClassifyCommand;
pub use compare::CompareCommand;
pub use completions::CompletionsCommand;
pub use convert::ConvertCommand;
pub use short::ShortCommand;
pub use split::SplitCommand;
