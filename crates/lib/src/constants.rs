//! Constants used throughout the Doorman library.

/// File extension for identity records and derived runtime documents.
pub const DOCUMENT_EXT: &str = "json";

/// File extension for the per-tenant session state file consumed by the
/// external authenticator.
pub const SESSION_EXT: &str = "dat";
