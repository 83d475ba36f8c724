//! Error type shared by the entity repository ports.

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity repository adapters.
    pub enum RepositoryError {
        /// No stored entity has the requested key.
        NotFound { entity: String, id: i32 } =>
            "{entity} {id} not found",
        /// The stored row changed since the entity was loaded.
        ConcurrencyConflict { entity: String, id: i32 } =>
            "{entity} {id} was modified by another writer",
        /// The entity is still referenced and cannot be removed.
        ReferenceInUse { message: String } =>
            "entity is still referenced: {message}",
        /// The entity refers to a row that no longer exists.
        MissingReference { message: String } =>
            "referenced entity does not exist: {message}",
        /// A uniqueness constraint rejected the write.
        Duplicate { message: String } =>
            "duplicate value: {message}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "repository query failed: {message}",
    }
}
