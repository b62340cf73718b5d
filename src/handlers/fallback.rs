use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use crate::core::error::PageError;

pub async fn fallback_handler(headers: HeaderMap) -> Response {
    let accepts_html = headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        return PageError::NotFound("This page".to_string()).into_response();
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_browser_gets_html_404() {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "text/html,application/xhtml+xml".parse().unwrap());

        let response = fallback_handler(headers).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_other_clients_get_plain_404() {
        let response = fallback_handler(HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
