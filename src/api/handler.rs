use crate::{
    encode::png::png_to_base64,
    foundation::error::{OverlayError, OverlayResult},
    render::{
        config::OverlayConfig,
        pipeline::render_png,
        request::{OverlayDescriptor, RenderRequest},
    },
};

/// JSON body returned by [`handle`].
///
/// Error responses carry only `status_code` and `error_message`; successful ones carry the
/// overlay as well and an explicit `error_message: null`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiBody {
    /// Mirrors the HTTP status.
    pub status_code: u16,
    /// Base64 PNG of the overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_png_b64: Option<String>,
    /// What was drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_json: Option<OverlayDescriptor>,
    /// Free-text critique slot, always empty for now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_critique: Option<String>,
    /// Failure description, `null` on success.
    pub error_message: Option<String>,
}

/// Transport-neutral response: status, optional `Allow` header value, JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value for the `Allow` header, set on 405.
    pub allow: Option<&'static str>,
    /// Response body.
    pub body: ApiBody,
}

impl ApiResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            allow: None,
            body: ApiBody {
                status_code: status,
                overlay_png_b64: None,
                overlay_json: None,
                ai_critique: None,
                error_message: Some(message.into()),
            },
        }
    }

    /// Serialize the body as JSON.
    pub fn body_json(&self) -> OverlayResult<String> {
        serde_json::to_string(&self.body)
            .map_err(|e| OverlayError::encode(format!("serialize response body: {e}")))
    }
}

/// Parse a request body. Blank bodies mean "all defaults".
pub fn parse_body(body: &str) -> OverlayResult<RenderRequest> {
    if body.trim().is_empty() {
        return Ok(RenderRequest::default());
    }
    serde_json::from_str(body).map_err(|e| OverlayError::request(format!("parse body: {e}")))
}

/// Run one overlay request through the full boundary contract.
///
/// Only `POST`, matched exactly, is accepted (405 with `Allow: POST` otherwise). Any parse, render, or encode
/// failure becomes a 500 with no image attached.
#[tracing::instrument(skip(body, config), fields(body_len = body.len()))]
pub fn handle(method: &str, body: &str, config: &OverlayConfig) -> ApiResponse {
    if method != "POST" {
        return ApiResponse {
            allow: Some("POST"),
            ..ApiResponse::error(405, "Method not allowed")
        };
    }

    let result = parse_body(body).and_then(|req| render_png(&req, config));
    match result {
        Ok(enc) => ApiResponse {
            status: 200,
            allow: None,
            body: ApiBody {
                status_code: 200,
                overlay_png_b64: Some(png_to_base64(&enc.png)),
                overlay_json: Some(enc.descriptor),
                ai_critique: Some(String::new()),
                error_message: None,
            },
        },
        Err(err) => {
            tracing::warn!(error = %err, "overlay request failed");
            ApiResponse::error(500, err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/api/handler.rs"]
mod tests;
