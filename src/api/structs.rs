/// Shared state handed to every API handler.
pub mod api_service_data;

/// Body of a download record request.
pub mod download_request;

/// Query string carrying an optional ranking limit.
pub mod query_limit;
