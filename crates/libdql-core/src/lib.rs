//! Assembles parameterized [DQL](https://dgraph.io/docs/dql/) query
//! documents from a tree of composable fragments: anything implementing the
//! render contract contributes text and positional arguments, and
//! [`assemble()`] merges them into one named, typed, wrapped document.

mod fragment;
pub mod operation;
mod raw_fragment;
pub mod types;

pub use fragment::DqlFragment;
pub use fragment::FragmentRenderError;
pub use fragment::PLACEHOLDER_MARKER;
pub use fragment::RenderedFragment;
pub use operation::DqlDocument;
pub use operation::Operation;
pub use operation::QueryAssembleError;
pub use operation::QueryBuilder;
pub use operation::assemble;
pub use raw_fragment::RawFragment;
pub use types::DqlType;
pub use types::Value;
