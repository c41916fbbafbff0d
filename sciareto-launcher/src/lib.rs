#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod instance;
pub mod launcher;
pub mod paths;

pub use config::LauncherConfig;
pub use error::LaunchError;
pub use instance::InstanceGuard;
pub use launcher::jvm_arguments;
pub use launcher::Launcher;
pub use launcher::Outcome;
pub use paths::base_directory;
pub use paths::LaunchPaths;

use clap::Parser;
use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

pub const PRODUCT_NAME: &str = "SciaReto";
pub const COPYRIGHT: &str = "Copyright (C) 2018 Igor Maznitsa";
pub const LOG_FILE_NAME: &str = "sciareto-launcher.log";

#[derive(Parser)]
#[clap(author, about, version)]
struct Opts {}

pub fn setup() -> Result<WorkerGuard> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1");
    }

    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    let appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
    )?;

    // Record panics as `ERROR` events so they reach the log file as well
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));

    Ok(guard)
}

pub fn print_banner() {
    println!("{PRODUCT_NAME} launcher v{}", env!("CARGO_PKG_VERSION"));
    println!("{COPYRIGHT}");
}

/// Entry point shared by the launcher executables
///
/// Exits the process with status 1 when another instance already holds the mutex; every other
/// failure is logged and returned for color-eyre to report.
pub fn launch(config: LauncherConfig) -> Result<()> {
    let _opts = Opts::parse();

    // File logging worker guard has to be held until the very end to flush
    let guard = setup()?;

    print_banner();
    tracing::debug!("effective configuration: {}", serde_json::to_string(&config)?);

    let mut launcher = Launcher::new(config);
    match launcher.run() {
        Ok(Outcome::Detached { pid }) => {
            tracing::info!("application started as process {pid}");
        }
        Ok(Outcome::Exited { status }) => {
            tracing::info!("application exited with {status}");
        }
        Err(error) if error.is_already_running() => {
            tracing::warn!("{error}");
            drop(launcher);
            drop(guard);
            std::process::exit(1);
        }
        Err(error) => {
            tracing::error!("{error}");
            return Err(error.into());
        }
    }

    Ok(())
}
