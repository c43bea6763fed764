use gloo_net::http::{Method, RequestBuilder, Response};
use log::error;
use shared::{ErrorResponse, MutationOutcome, SharedError};

/// Creates a request for the given method. Same-origin requests carry the
/// session cookie, which is all the backend needs to authorize mutations.
pub fn request(method: Method, url: &str) -> RequestBuilder {
    RequestBuilder::new(url)
        .method(method)
        .header("Accept", "application/json")
}

/// Backend error message from a failed response, when its body has one
pub async fn error_message(response: Response) -> Option<String> {
    response.json::<ErrorResponse>().await.ok().map(|e| e.error)
}

/// Turns a failed response into an error for read endpoints
pub async fn status_error(response: Response) -> SharedError {
    let status = response.status();
    if status == 401 {
        return SharedError::Unauthorized;
    }
    SharedError::Http {
        status,
        message: error_message(response)
            .await
            .unwrap_or_else(|| "Unknown error occurred".to_string()),
    }
}

/// Three-way outcome of a mutating request
pub async fn mutation_outcome(
    sent: Result<Response, gloo_net::Error>,
    action: &str,
) -> MutationOutcome {
    match sent {
        Ok(response) if response.ok() => MutationOutcome::Success,
        Ok(response) => {
            let status = response.status();
            let message = error_message(response).await;
            error!("Failed to {}: HTTP {} {:?}", action, status, message);
            MutationOutcome::from_status(status, message)
        }
        Err(e) => {
            error!("Failed to {}: {}", action, e);
            MutationOutcome::from(SharedError::Transport(e.to_string()))
        }
    }
}
