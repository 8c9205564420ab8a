use fio_toolkit::config::{LoggingSettings, Settings};
use fio_toolkit::services::load_roster;
use fio_toolkit::showcase::render_showcase;
use fio_toolkit::{sample_roster, PartnerMatcher};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is configured from settings, so settings come first
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    let roster = match settings.roster.path.as_deref() {
        Some(path) => load_roster(path).map_err(|e| {
            error!("Failed to load roster from {}: {}", path, e);
            std::io::Error::other(e)
        })?,
        None => {
            info!("No roster file configured, using the sample roster");
            sample_roster()
        }
    };

    let matcher = PartnerMatcher::from_settings(&settings.matching);
    info!("Partner matcher initialized: {:?}", matcher);

    let showcase = render_showcase(&roster, &matcher, &mut rand::rng()).map_err(|e| {
        error!("Showcase failed: {}", e);
        std::io::Error::other(e)
    })?;

    print!("{}", showcase);
    Ok(())
}
