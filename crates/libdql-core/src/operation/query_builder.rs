use crate::fragment::DqlFragment;
use crate::operation::Operation;
use std::sync::Arc;

/// Pairs one primary operation fragment with the variable fragments whose
/// output must precede it in the assembled document.
///
/// Holding the two roles in separate fields is what lets
/// [`assemble()`](crate::operation::assemble) guarantee declare-before-use
/// ordering: every builder's variable fragments render ahead of every
/// builder's primary fragment, never interleaved with the primary pass.
#[derive(Clone)]
pub struct QueryBuilder {
    operation: Arc<dyn Operation>,
    variables: Vec<Arc<dyn DqlFragment>>,
}
impl QueryBuilder {
    pub fn new(operation: impl Operation + 'static) -> Self {
        Self {
            operation: Arc::new(operation),
            variables: vec![],
        }
    }

    /// Add a variable fragment after any previously added variable
    /// fragments.
    pub fn add_variable(mut self, fragment: impl DqlFragment + 'static) -> Self {
        self.variables.push(Arc::new(fragment));
        self
    }

    /// Set the list of variable fragments.
    ///
    /// NOTE: If any previous variable fragments were added (either using
    /// this function or [`QueryBuilder::add_variable()`]), they will be
    /// fully replaced by the fragments passed here.
    pub fn set_variables(mut self, fragments: Vec<Arc<dyn DqlFragment>>) -> Self {
        self.variables = fragments;
        self
    }

    /// Access this builder's primary operation fragment.
    pub fn operation(&self) -> &dyn Operation {
        self.operation.as_ref()
    }

    /// Access this builder's variable fragments, in the order they were
    /// added.
    pub fn variables(&self) -> &[Arc<dyn DqlFragment>] {
        &self.variables
    }
}
