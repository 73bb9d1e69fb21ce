use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub create_if_missing: bool,
}

fn environment() -> Environment {
    Environment::with_prefix("TRIVIA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then `configuration.toml` if present, then `TRIVIA__*` variables
/// (e.g. `TRIVIA__DATABASE__PATH`). A `.env` file is loaded first.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    load_settings(File::with_name("configuration").required(false), environment())
}

fn load_settings<S>(file: S, env: Environment) -> Result<Settings, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .set_default("database.path", "trivia.db")?
        .set_default("database.create_if_missing", true)?
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_file() -> impl Source + Send + Sync + 'static {
        File::with_name("definitely-missing-trivia-config").required(false)
    }

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(source))
    }

    #[test]
    fn defaults() {
        let settings = load_settings(no_file(), env_from(&[])).unwrap();
        assert_eq!(settings.application.address(), "0.0.0.0:8080");
        assert_eq!(settings.database.path, "trivia.db");
        assert!(settings.database.create_if_missing);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = load_settings(
            no_file(),
            env_from(&[
                ("TRIVIA__APPLICATION__PORT", "5000"),
                ("TRIVIA__DATABASE__PATH", "/tmp/trivia_test.db"),
                ("TRIVIA__DATABASE__CREATE_IF_MISSING", "false"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.application.port, 5000);
        assert_eq!(settings.application.host, "0.0.0.0");
        assert_eq!(settings.database.path, "/tmp/trivia_test.db");
        assert!(!settings.database.create_if_missing);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let env = env_from(&[("TRIVIA__APPLICATION__PORT", "port")]);
        assert!(load_settings(no_file(), env).is_err());
    }
}
