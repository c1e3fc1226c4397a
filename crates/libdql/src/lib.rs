pub use libdql_core::*;
