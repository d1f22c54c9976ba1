use gloo_net::http::{Request, RequestBuilder, Response};
use shared::{Result, SharedError};
use web_sys::{AbortController, AbortSignal};

/// Creates a GET request, optionally tied to an abort signal
pub fn json_get(url: &str, signal: Option<&AbortSignal>) -> RequestBuilder {
    Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
}

/// Creates a POST request
pub fn json_post(url: &str) -> RequestBuilder {
    Request::post(url)
        .header("Accept", "application/json")
}

/// Treats any non-2xx response as a transport failure without reading its body
pub fn ensure_success(url: &str, response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(SharedError::status(url, response.status()))
    }
}

/// Abort handle for one in-flight read; aborting it drops the request.
pub struct RequestAbort {
    controller: Option<AbortController>,
}

impl RequestAbort {
    pub fn new() -> Self {
        let controller = AbortController::new()
            .map_err(|e| log::warn!("AbortController unavailable: {:?}", e))
            .ok();
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for RequestAbort {
    fn default() -> Self {
        Self::new()
    }
}
