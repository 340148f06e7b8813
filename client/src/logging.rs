use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Output goes to stderr so stdout only carries the campaign ID line.
/// `RUST_LOG` overrides the default filter, and `APP_ENV=production` switches
/// to JSON lines.
pub fn init_subscriber() {
    let is_production = std::env::var("APP_ENV").as_deref() == Ok("production");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campaign_client=info,reqwest=warn".into());

    let subscriber = tracing_subscriber::registry().with(filter);

    if is_production {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber.with(fmt::layer().with_writer(std::io::stderr)).init();
    };
}
