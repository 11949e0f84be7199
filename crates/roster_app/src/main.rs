use roster_app::platform::{self, logging};
use roster_logging::roster_error;

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = platform::load_config(&cwd);
    let log_to_file = loaded.as_ref().is_ok_and(|config| config.log_to_file);
    logging::initialize(logging::LogDestination::from_config(log_to_file));

    let config = loaded.unwrap_or_else(|err| {
        roster_error!("{}; falling back to defaults", err);
        platform::AppConfig::default()
    });
    platform::run_app(&config)
}
