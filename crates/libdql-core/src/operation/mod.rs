mod composer;
mod document;
mod document_builder;
#[allow(clippy::module_inception)]
mod operation;
mod placeholders;
mod query_builder;

pub use document::DqlDocument;
pub use document_builder::QueryAssembleError;
pub use document_builder::assemble;
pub use operation::Operation;
pub use query_builder::QueryBuilder;

#[cfg(test)]
mod tests;
