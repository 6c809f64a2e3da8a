use tracing::warn;

use tagshelf::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(err) = s.validate() {
                warn!(error = %err, "using default settings");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(err) => {
            // Config is optional; failures should not prevent an export.
            warn!(error = %err, "using default settings");
            config::Settings::default()
        }
    }
}
