use crate::fragment::DqlFragment;
use crate::fragment::FragmentRenderError;
use crate::fragment::RenderedFragment;
use crate::operation::Operation;
use crate::types::Value;

/// A leaf fragment wrapping literal DQL text.
///
/// The text passes through assembly untouched apart from placeholder
/// substitution: each [`PLACEHOLDER_MARKER`](crate::PLACEHOLDER_MARKER) in
/// it is bound to the corresponding positional argument. A named
/// `RawFragment` can stand as a builder's primary operation fragment, in
/// which case its name contributes a segment to the assembled document's
/// generated name.
#[derive(Clone, Debug, PartialEq)]
pub struct RawFragment {
    args: Vec<Value>,
    name: String,
    text: String,
}
impl RawFragment {
    /// A nameless leaf fragment, for use as a variable fragment or a nested
    /// block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            args: vec![],
            name: String::new(),
            text: text.into(),
        }
    }

    /// A named fragment usable as a builder's primary operation fragment.
    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            args: vec![],
            name: name.into(),
            text: text.into(),
        }
    }

    /// Append a positional argument after any previously added arguments.
    pub fn add_arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set the list of positional arguments.
    ///
    /// NOTE: If any previous arguments were added (either using this
    /// function or [`RawFragment::add_arg()`]), they will be fully replaced
    /// by the arguments passed here.
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }
}
impl DqlFragment for RawFragment {
    fn render(&self) -> Result<RenderedFragment, FragmentRenderError> {
        Ok(RenderedFragment::new(self.text.clone(), self.args.clone()))
    }
}
impl Operation for RawFragment {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}
