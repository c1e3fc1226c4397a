use crate::fragment::PLACEHOLDER_MARKER;
use crate::operation::QueryAssembleError;
use crate::types::Value;
use indexmap::IndexMap;

/// The output of the substitution pass: the document body with every marker
/// replaced, plus the variable table binding each generated name to its
/// positional argument.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Substitution {
    pub(crate) body: String,
    pub(crate) variables: IndexMap<String, Value>,
}

/// Replace each [`PLACEHOLDER_MARKER`] in `text` with a `$N` variable
/// reference.
///
/// Names are assigned sequentially from `"0"` in strict left-to-right marker
/// order, and each name binds the next unconsumed entry of `args`. The
/// marker count and `args.len()` must agree; the check runs before any
/// replacement, so a mismatch never yields partially substituted text.
pub(crate) fn substitute_placeholders(
    text: &str,
    args: &[Value],
) -> Result<Substitution, QueryAssembleError> {
    let placeholder_count = text.matches(PLACEHOLDER_MARKER).count();
    if placeholder_count != args.len() {
        return Err(QueryAssembleError::ArgumentCountMismatch {
            argument_count: args.len(),
            placeholder_count,
        });
    }

    let mut body = String::with_capacity(text.len());
    let mut variables = IndexMap::with_capacity(args.len());
    let mut remaining = text;
    let mut index = 0;

    // `args[index]` stays in bounds: this loop consumes markers with the
    // same non-overlapping left-to-right scan `str::matches` counted.
    while let Some(position) = remaining.find(PLACEHOLDER_MARKER) {
        let name = index.to_string();
        body.push_str(&remaining[..position]);
        body.push('$');
        body.push_str(&name);
        variables.insert(name, args[index].clone());
        remaining = &remaining[position + PLACEHOLDER_MARKER.len()..];
        index += 1;
    }
    body.push_str(remaining);

    Ok(Substitution { body, variables })
}
