//! Failure type shared by every persistence port.

use super::define_port_error;

define_port_error! {
    /// Errors raised by store adapters.
    ///
    /// Services do not branch on the variant: any of them becomes an internal
    /// error with a generic message. The split only sharpens log output.
    pub enum StorageError {
        /// A connection could not be obtained or was lost mid-statement.
        Connection { message: String } =>
            "store connection failed: {message}",
        /// The statement itself failed (constraint, syntax, type coercion).
        Query { message: String } =>
            "store query failed: {message}",
    }
}
