//! Port abstraction for loading live schema metadata.

use crate::domain::SchemaDiagram;

use super::define_port_error;

define_port_error! {
    /// Errors raised when loading schema metadata.
    pub enum SchemaSnapshotRepositoryError {
        /// Connection to the backing datastore failed.
        Connection { message: String } =>
            "schema snapshot connection failed: {message}",
        /// Schema introspection query failed.
        Query { message: String } =>
            "schema snapshot query failed: {message}",
    }
}

/// Port for reading schema metadata from the active persistence backend.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSnapshotRepository: Send + Sync {
    /// Load tables, columns and foreign keys from the backing store.
    fn load_schema_diagram(&self) -> Result<SchemaDiagram, SchemaSnapshotRepositoryError>;
}
