use crate::types::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// A fully assembled DQL document: the wrapped query text plus the variable
/// table to post alongside it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DqlDocument {
    document: String,
    variables: IndexMap<String, Value>,
}
impl DqlDocument {
    pub(crate) fn new(document: String, variables: IndexMap<String, Value>) -> Self {
        Self {
            document,
            variables,
        }
    }

    /// The final document text: `query <Name>(<declarations>) { <body> }`.
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    /// The variable table, keyed by generated name in generation order.
    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }

    pub fn into_parts(self) -> (String, IndexMap<String, Value>) {
        (self.document, self.variables)
    }
}
