//! Error type shared by the record repository ports.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user, movie and seed repository adapters.
    pub enum RecordPersistenceError {
        /// Repository connection could not be established.
        Connection => "record store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "record store query failed: {message}",
    }
}
