use std::{process, sync::Arc};

use marquee::{
    application::documents::{DocumentService, Documents},
    application::error::AppError,
    application::events::EventBus,
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        store::FileDocuments,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
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
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(config::ServeArgs::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Seed(_) => run_seed(settings).await,
    }
}

async fn open_documents(settings: &config::Settings) -> Result<Arc<DocumentService>, AppError> {
    let store = FileDocuments::new(settings.storage.data_dir.clone())
        .map_err(|err| AppError::from(InfraError::Io(err)))?;
    let documents = DocumentService::open(Arc::new(store), EventBus::new()).await?;
    Ok(Arc::new(documents))
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let documents = open_documents(&settings).await?;
    let sync_handle = documents.spawn_sync();

    let state = HttpState {
        documents,
        admin_secret: settings.auth.admin_secret.clone().into(),
    };
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::Io(err)))?;
    info!(
        target = "marquee::serve",
        addr = %settings.server.addr,
        data_dir = %settings.storage.data_dir.display(),
        "Marquee listening"
    );

    let result = axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")));

    sync_handle.abort();
    let _ = sync_handle.await;

    result
}

/// Write the default documents into the data directory so a fresh deployment
/// starts from a known-good, populated state.
async fn run_seed(settings: config::Settings) -> Result<(), AppError> {
    let documents = open_documents(&settings).await?;

    let defaults = Documents::default();
    documents.publish_movies(defaults.movies).await?;
    documents.publish_ads_enabled(defaults.ads_enabled).await?;
    documents.publish_ad_config(defaults.ad_config).await?;
    documents.publish_site_config(defaults.site_config).await?;

    info!(
        target = "marquee::seed",
        data_dir = %settings.storage.data_dir.display(),
        "default documents written"
    );
    Ok(())
}
