use crate::fragment::FragmentRenderError;
use crate::operation::DqlDocument;
use crate::operation::QueryBuilder;
use crate::operation::composer;
use crate::operation::placeholders;
use crate::operation::placeholders::Substitution;
use crate::types::DqlType;
use crate::types::Value;
use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

type Result<T> = std::result::Result<T, QueryAssembleError>;

/// Assemble one parameterized DQL document from an ordered list of builders.
///
/// Every variable fragment renders ahead of every primary operation
/// fragment, rendered statements are joined with single spaces, each
/// placeholder marker is substituted with a generated `$N` variable
/// reference, and the result is wrapped in a
/// `query <Name>(<declarations>) { <body> }` header derived from the
/// operations' declared names.
///
/// Assembly is a pure computation over its inputs: concurrent calls share
/// no state, and on failure no partial document or variable table is
/// returned. Zero builders assemble to an empty document,
/// `query () {  }`, without error.
pub fn assemble(builders: &[QueryBuilder]) -> Result<DqlDocument> {
    let composition = composer::compose(builders)?;
    let inner_query = composition.statements.join(" ");

    let Substitution { body, variables } =
        placeholders::substitute_placeholders(&inner_query, &composition.args)?;

    let document_name = document_name(builders);
    let declarations = render_declarations(&variables);
    let document = format!("query {}({}) {{ {} }}", document_name, declarations, body);

    debug!(
        "assembled document \"{}\" with {} variable(s)",
        document_name,
        variables.len(),
    );

    Ok(DqlDocument::new(document, variables))
}

/// Join each operation's title-cased name with `_`, in builder order.
/// Operations sharing a name are not deduplicated; both keep their segment.
fn document_name(builders: &[QueryBuilder]) -> String {
    builders
        .iter()
        .map(|builder| title_case(builder.operation().name()))
        .collect::<Vec<_>>()
        .join("_")
}

/// Lower-case `name`, then capitalize the first letter of each
/// whitespace-separated word. Whitespace and non-letter characters pass
/// through unchanged.
fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            titled.push(ch);
        } else if at_word_start {
            titled.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            titled.push(ch);
        }
    }

    titled
}

/// Render the `$name:type` declaration list, ordered by the numeric value
/// of each generated name. Generated names are always decimal integers;
/// a lexicographic sort would put `"10"` ahead of `"2"`.
fn render_declarations(variables: &IndexMap<String, Value>) -> String {
    let mut entries: Vec<(&String, &Value)> = variables.iter().collect();
    entries.sort_by_key(|(name, _)| name.parse::<u64>().unwrap_or(u64::MAX));

    let declarations: Vec<String> = entries
        .into_iter()
        .map(|(name, value)| format!("${}:{}", name, DqlType::from_value(value)))
        .collect();

    declarations.join(", ")
}

#[derive(Clone, Debug, Error)]
pub enum QueryAssembleError {
    /// The concatenated statement text carried a different number of
    /// placeholder markers than the builders collected positional
    /// arguments.
    #[error(
        "found {placeholder_count} placeholder marker(s) but {argument_count} \
        positional argument(s)"
    )]
    ArgumentCountMismatch {
        argument_count: usize,
        placeholder_count: usize,
    },

    #[error(transparent)]
    FragmentRenderError(#[from] FragmentRenderError),
}
