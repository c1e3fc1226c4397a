use crate::fragment::RenderedFragment;
use crate::operation::QueryAssembleError;
use crate::operation::QueryBuilder;
use crate::types::Value;

/// The merged output of one render pass over a set of builders: every
/// rendered statement plus the positional arguments collected alongside
/// them, both in render order.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Composition {
    pub(crate) args: Vec<Value>,
    pub(crate) statements: Vec<String>,
}
impl Composition {
    fn push(&mut self, rendered: RenderedFragment) {
        let (text, args) = rendered.into_parts();
        self.statements.push(text);
        self.args.extend(args);
    }
}

/// Render every fragment reachable from `builders`, variable fragments
/// first.
///
/// All variable fragments render in builder order, then all primary
/// fragments in builder order. The first render failure aborts the pass:
/// no further fragments are rendered and no partial output is returned.
pub(crate) fn compose(builders: &[QueryBuilder]) -> Result<Composition, QueryAssembleError> {
    let mut composition = Composition::default();

    for builder in builders {
        for fragment in builder.variables() {
            composition.push(fragment.render()?);
        }
    }

    for builder in builders {
        composition.push(builder.operation().render()?);
    }

    Ok(composition)
}
