use crate::fragment::DqlFragment;
use crate::fragment::FragmentRenderError;
use crate::fragment::RenderedFragment;
use crate::operation::Operation;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Fragment whose render always fails.
pub(crate) struct FailingFragment {
    pub(crate) message: &'static str,
}
impl DqlFragment for FailingFragment {
    fn render(&self) -> Result<RenderedFragment, FragmentRenderError> {
        Err(FragmentRenderError::new(self.message))
    }
}
impl Operation for FailingFragment {
    fn name(&self) -> &str {
        "failing"
    }
}

/// Fragment that records how many times it was rendered.
pub(crate) struct CountingFragment {
    pub(crate) renders: Arc<AtomicUsize>,
    pub(crate) text: &'static str,
}
impl DqlFragment for CountingFragment {
    fn render(&self) -> Result<RenderedFragment, FragmentRenderError> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        Ok(RenderedFragment::new(self.text, vec![]))
    }
}
impl Operation for CountingFragment {
    fn name(&self) -> &str {
        "counting"
    }
}
