use crate::types::Value;
use std::sync::Arc;
use thiserror::Error;

/// The in-text token a fragment embeds wherever one of its positional
/// arguments belongs (e.g. `"eq(name, ??)"`). Assembly replaces each
/// occurrence with a reference to a generated query variable.
pub const PLACEHOLDER_MARKER: &str = "??";

/// The output of one fragment render: the fragment's DQL text plus the
/// positional arguments backing its placeholder markers, in marker order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFragment {
    args: Vec<Value>,
    text: String,
}
impl RenderedFragment {
    pub fn new(text: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            args,
            text: text.into(),
        }
    }

    /// The positional arguments collected from this render, ordered to match
    /// the markers in [`RenderedFragment::text()`].
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The rendered DQL text, placeholder markers included.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.args)
    }
}

/// The render contract every composable piece of query text satisfies.
///
/// Filters, directives, nested blocks and top-level operations all reduce to
/// `(text, positional arguments)` through this trait. Implementations must
/// be pure: rendering the same fragment twice yields the same output, and a
/// render holds no state beyond the call.
pub trait DqlFragment {
    fn render(&self) -> Result<RenderedFragment, FragmentRenderError>;
}

/// Failure surfaced by a fragment's [`DqlFragment::render()`].
///
/// Assembly halts on the first render failure and returns this error
/// unmodified; no partial document is produced.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct FragmentRenderError {
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}
impl FragmentRenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying failure. The source is reference-counted so the
    /// error stays `Clone` like the rest of this crate's error types.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }
}
