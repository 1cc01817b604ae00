//! Model ingestion: discover YAML documents in a directory and merge their
//! category lists into one [`sysml_model::Model`].

pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::list_yaml_files;
pub use error::{IngestError, Result};
pub use loader::{ModelLoader, load_model};
