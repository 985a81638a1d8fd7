use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use sitemap_core::{Document, DocumentFormat, Index, Sitemap, generate_document};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Produces a fresh document per request, or `None` when there is nothing to serve.
pub type Generator<D> = Arc<dyn Fn() -> Option<D> + Send + Sync>;

/// Runs `generator` and wraps the rendered bytes in a response.
///
/// Success is `200` with the format's `Content-Type`. A missing document or a
/// render failure is logged and answered with an empty `500`.
pub fn document_response<D, F>(generator: F, format: DocumentFormat) -> Response
where
    D: Document,
    F: FnOnce() -> Option<D>,
{
    match generate_document(generator, format) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, format.content_type())], body).into_response(),
        Err(e) => {
            tracing::error!(%format, error = %e, "Failed to generate document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET route serving `generator`'s document in `format`.
pub fn document_route<D, S>(generator: Generator<D>, format: DocumentFormat) -> MethodRouter<S>
where
    D: Document + 'static,
    S: Clone + Send + Sync + 'static,
{
    get(move || {
        let response = document_response(generator.as_ref(), format);
        std::future::ready(response)
    })
}

pub fn router(sitemap: Generator<Sitemap>, index: Generator<Index>) -> Router {
    Router::new()
        .route("/sitemap.xml", document_route(sitemap.clone(), DocumentFormat::Xml))
        .route("/sitemap.txt", document_route(sitemap.clone(), DocumentFormat::Text))
        .route("/sitemap.html", document_route(sitemap.clone(), DocumentFormat::Html))
        .route("/sitemap.json", document_route(sitemap.clone(), DocumentFormat::Json))
        .route("/sitemap-news.xml", document_route(sitemap.clone(), DocumentFormat::GoogleNews))
        .route("/sitemap-mobile.xml", document_route(sitemap, DocumentFormat::Mobile))
        .route("/sitemap-index.xml", document_route(index, DocumentFormat::Xml))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
