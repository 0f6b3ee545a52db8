//! Configuration loading.
//!
//! - [`ini`] - INI file reader returning the `[config]` section
//! - [`settings`] - typed settings validated from that section

mod ini;
mod settings;

pub use ini::{load_config, ConfigMap};
pub use settings::Settings;
