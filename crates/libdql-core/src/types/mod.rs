mod dql_type;
mod value;

pub use dql_type::DqlType;
pub use value::Value;

#[cfg(test)]
mod tests;
