// Video Indexer API client module
//
// Handles all communication with the Azure Video Indexer REST API:
// - Access token retrieval (subscription key -> short-lived token)
// - Video list retrieval (token as query parameter)

pub mod auth;
pub mod client;
pub mod error;
pub mod types;
