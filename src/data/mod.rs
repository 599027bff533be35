mod builtin;
mod loader;

pub use builtin::web_server_quiz;
pub use loader::{load_quiz_from_json, validate_definition, DefinitionError, LoadError};
