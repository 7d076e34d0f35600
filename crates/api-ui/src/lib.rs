use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub mod config;
pub mod error;
pub mod layers;
pub mod queries;
pub mod router;
pub mod state;
pub mod tables;
#[cfg(test)]
pub mod tests;
pub mod views;

/// Paging parameters shared by the HTML and JSON table views.
///
/// `page` is kept as raw text: anything that is not a positive integer means
/// the first page instead of a rejected request.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParameters {
    /// 1-based page number, 50 rows per page
    pub page: Option<String>,
}
