pub mod cli;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod jq_exec;
pub mod lower;
pub mod path_de;
pub mod schema;
pub mod sink;
pub mod source;

pub use error::{FormError, SchemaError};
pub use ir::AssembledTree;
pub use lower::{assemble, MaskHook, NoMask};
pub use schema::FormSchema;
