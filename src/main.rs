use std::{process, sync::Arc};

use foglio::{
    application::{error::AppError, render::converter, renderer::DocumentRenderer},
    config,
    domain::page::Page,
    infra::{fetch::HttpDocumentSource, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let settings = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let page = Page::with_region(settings.document.region.clone());
    let source = HttpDocumentSource::new(settings.document.base_url.clone())
        .map_err(|err| AppError::unexpected(format!("failed to initialise http client: {err}")))?;

    let renderer = DocumentRenderer::new(
        Arc::new(source),
        converter(),
        page.clone(),
        settings.document.name.clone(),
        settings.document.region.clone(),
    );

    // A failed render is logged by the renderer and leaves the region empty;
    // it does not fail the process.
    renderer.render().await;

    if let Some(markup) = page.content(&settings.document.region) {
        print!("{markup}");
    }

    Ok(())
}
