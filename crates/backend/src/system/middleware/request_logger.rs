use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Пишет одну строку на запрос: длительность, размер ответа, статус, метод и путь.
/// Размер берётся из `Content-Length`; тело буферизуется только для ответов API
/// без этого заголовка (статика отдаётся потоком).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let is_api = uri.path().starts_with("/api/");

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let declared_size = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    let (size, body) = match declared_size {
        Some(size) => (Some(size), body),
        None if is_api => match to_bytes(body, usize::MAX).await {
            Ok(bytes) => (Some(bytes.len()), Body::from(bytes)),
            Err(e) => {
                tracing::warn!(
                    "{} {} {} | {}ms | body read failed: {}",
                    parts.status.as_u16(),
                    method,
                    uri.path(),
                    start.elapsed().as_millis(),
                    e
                );
                return Response::from_parts(parts, Body::default());
            }
        },
        None => (None, body),
    };

    let size = size
        .map(format_number)
        .unwrap_or_else(|| "stream".to_string());

    if parts.status.is_server_error() {
        tracing::warn!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            start.elapsed().as_millis(),
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    } else {
        tracing::info!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            start.elapsed().as_millis(),
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    }

    Response::from_parts(parts, body)
}
