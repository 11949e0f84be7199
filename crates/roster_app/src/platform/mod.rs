pub mod app;
pub mod config;
pub mod effects;
pub mod logging;
pub mod notify;

pub use app::{run_app, scroll_to_bottom, Session};
pub use config::{load_config, AppConfig, ConfigError, CONFIG_FILENAME};
pub use effects::EffectRunner;
pub use notify::{LogNotifier, Notifier};
