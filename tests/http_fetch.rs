//! HTTP adapter behavior against an ephemeral local server, including the
//! non-success-status boundary the viewer intentionally does not guard.

use std::net::SocketAddr;

use axum::{Router, http::StatusCode, routing::get};
use foglio::{
    application::{render::{converter, Converter}, renderer::DocumentRenderer, source::DocumentSource},
    domain::page::Page,
    infra::fetch::HttpDocumentSource,
};
use std::sync::Arc;
use url::Url;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn base_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/")).expect("base url")
}

#[tokio::test]
async fn fetches_document_body_as_text() {
    let router = Router::new().route("/conventions.md", get(|| async { "# Hello\n" }));
    let addr = serve(router).await;

    let source = HttpDocumentSource::new(base_url(addr)).expect("client");
    let body = source
        .fetch_text("conventions.md")
        .await
        .expect("fetch succeeds");

    assert_eq!(body, "# Hello\n");
}

#[tokio::test]
async fn resolves_name_against_base_path() {
    let router = Router::new().route("/docs/conventions.md", get(|| async { "# Nested\n" }));
    let addr = serve(router).await;

    let base = Url::parse(&format!("http://{addr}/docs/")).expect("base url");
    let source = HttpDocumentSource::new(base).expect("client");
    let body = source
        .fetch_text("conventions.md")
        .await
        .expect("fetch succeeds");

    assert_eq!(body, "# Nested\n");
}

#[tokio::test]
async fn fetch_reads_body_of_non_ok_response() {
    let router = Router::new().route(
        "/conventions.md",
        get(|| async { (StatusCode::NOT_FOUND, "# Missing\n") }),
    );
    let addr = serve(router).await;

    let source = HttpDocumentSource::new(base_url(addr)).expect("client");
    let body = source
        .fetch_text("conventions.md")
        .await
        .expect("body is still readable");

    assert_eq!(body, "# Missing\n");
}

#[tokio::test]
async fn renders_document_served_with_error_status() {
    let router = Router::new().route(
        "/conventions.md",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "# Degraded\n") }),
    );
    let addr = serve(router).await;

    let page = Page::with_region("content");
    let source = HttpDocumentSource::new(base_url(addr)).expect("client");
    let renderer = DocumentRenderer::new(
        Arc::new(source),
        converter(),
        page.clone(),
        "conventions.md",
        "content",
    );

    renderer.render().await;

    let expected = converter()
        .convert("# Degraded\n")
        .expect("conversion succeeds");
    assert_eq!(page.content("content"), Some(expected));
}

#[tokio::test]
async fn fetch_fails_when_server_is_unreachable() {
    // Grab a free port, then close the listener so nothing answers on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let source = HttpDocumentSource::new(base_url(addr)).expect("client");
    let result = source.fetch_text("conventions.md").await;

    assert!(result.is_err());
}
