//! Blog Errors

use salvo::http::StatusError;
use tracing::error;

use orchard_app::domain::blog::BlogServiceError;

pub(crate) fn into_status_error(error: BlogServiceError) -> StatusError {
    match error {
        BlogServiceError::AlreadyExists => {
            StatusError::conflict().brief("A post with that slug already exists")
        }
        BlogServiceError::NotFound => StatusError::not_found().brief("Post not found"),
        BlogServiceError::MissingTitle => {
            StatusError::bad_request().brief("Both language titles are required")
        }
        BlogServiceError::Sql(source) => {
            error!("blog storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
