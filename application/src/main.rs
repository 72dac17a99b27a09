use std::{
    io::{self, Write as _},
    sync::OnceLock,
};

use application::{Args, Command, Config, Report, Service};
use common::Handler as _;
use futures::future;
use serde::Serialize;
use service::{
    domain::{city, listing},
    query, Screen,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        screen,
        geolocation,
        geocoding,
        directory,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let geolocation = geolocation.provider().map_err(|e| {
        log::error!("failed to initialize geolocation: {e}");
    })?;
    let geocoding = geocoding.client().map_err(|e| {
        log::error!("failed to initialize geocoding client: {e}");
    })?;
    let directory = directory.client().map_err(|e| {
        log::error!("failed to initialize directory client: {e}");
    })?;

    let service =
        Service::new(screen.into(), geolocation, geocoding, directory);

    match command.unwrap_or_default() {
        Command::Resolve => resolve(&service).await,
        Command::Cities { text } => search_cities(&service, text).await,
        Command::Types => print(&listing::property_types()),
    }
}

/// Runs the initial view resolution along with priming the city options,
/// then prints the resulting [`Report`].
async fn resolve(service: &Service) -> Result<(), ()> {
    let mut screen = Screen::new(service.config().default_center);

    let text = city::SearchText::default();
    let resolution = screen.begin_resolution();
    let city_search = screen.begin_city_search(&text);

    let (resolved, cities) = future::join(
        service.execute(query::ResolveInitialView),
        service.execute(query::cities::ByText::by(text)),
    )
    .await;

    let resolved = match resolved {
        Ok(r) => r,
        Err(e) => match e {},
    };
    _ = screen.finish_resolution(resolution, resolved);
    _ = screen.finish_city_search(city_search, cities);

    print(&Report::from(screen.state()))
}

/// Issues one city search per text concurrently and prints the options of
/// the latest one.
async fn search_cities(
    service: &Service,
    text: Vec<String>,
) -> Result<(), ()> {
    let mut screen = Screen::new(service.config().default_center);

    let texts: Vec<_> = if text.is_empty() {
        vec![city::SearchText::default()]
    } else {
        text.iter().map(city::SearchText::new).collect()
    };
    let tickets: Vec<_> =
        texts.iter().map(|t| screen.begin_city_search(t)).collect();

    let results = future::join_all(
        texts
            .into_iter()
            .map(|t| service.execute(query::cities::ByText::by(t))),
    )
    .await;

    for (ticket, result) in tickets.into_iter().zip(results) {
        _ = screen.finish_city_search(ticket, result);
    }

    print(&Report::from(screen.state()).city_options)
}

/// Prints the provided `value` as pretty JSON to stdout.
fn print(value: &impl Serialize) -> Result<(), ()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        log::error!("failed to encode output: {e}");
    })?;
    writeln!(io::stdout().lock(), "{json}").map_err(|e| {
        log::error!("failed to write output: {e}");
    })
}
