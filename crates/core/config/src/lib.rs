use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Newsdesk.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Newsdesk.toml").exists() {
            builder = builder.add_source(File::new("Newsdesk.toml", FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("NEWSDESK")
                .prefix_separator("__")
                .separator("__"),
        );

        match builder.build() {
            Ok(config) => config,
            Err(err) => panic!("Failed to build configuration: {err}"),
        }
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub strict_company_matching: bool,
    pub feed_limit: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub production: bool,
    pub database: Database,
    pub features: Features,
}

pub async fn init() {
    println!(
        ":: Newsdesk Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    match read().await.try_deserialize::<Settings>() {
        Ok(settings) => settings,
        Err(err) => panic!("Configuration is invalid: {err}"),
    }
}

/// Configure logging and common Rust variables
pub fn setup_logging() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    if pretty_env_logger::try_init().is_err() {
        log::debug!("Logger was already initialised.");
    }
}
