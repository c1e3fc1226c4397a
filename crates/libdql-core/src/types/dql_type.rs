use crate::types::Value;
use std::fmt;

/// The declared wire type of a generated query variable.
///
/// These are the type tokens DQL accepts in a variable-declaration header.
/// They are only ever consulted when rendering declarations; serializing the
/// variable table goes through [`Value`]'s own serialization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DqlType {
    Bool,
    DateTime,
    Float,
    Int,
    String,
}
impl DqlType {
    /// Infer the declared type for a bound [`Value`].
    ///
    /// Total over every [`Value`] variant: kinds with no dedicated DQL
    /// scalar token declare as `string`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(_) => DqlType::String,
            Value::Int(_) => DqlType::Int,
            Value::Float(_) => DqlType::Float,
            Value::Bool(_) => DqlType::Bool,
            Value::DateTime(_) => DqlType::DateTime,
            _ => DqlType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DqlType::Bool => "bool",
            DqlType::DateTime => "datetime",
            DqlType::Float => "float",
            DqlType::Int => "int",
            DqlType::String => "string",
        }
    }
}
impl fmt::Display for DqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
