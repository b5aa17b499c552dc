use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Informational response for operations that don't return a record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailsDto {
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloDto {
    pub msg: String,
}

/// Every route registered on the server, formatted as `METHOD /path`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub routes: Vec<String>,
}
