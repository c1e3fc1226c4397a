use crate::fragment::DqlFragment;

/// A top-level named fragment.
///
/// Each primary fragment of a [`QueryBuilder`](crate::operation::QueryBuilder)
/// must be an `Operation`; its declared name contributes one segment to the
/// assembled document's generated name. Variable fragments need no name and
/// participate through [`DqlFragment`] alone.
pub trait Operation: DqlFragment {
    fn name(&self) -> &str;
}
