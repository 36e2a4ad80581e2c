use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Значения по умолчанию повторяют запуск без конфигурации:
        // все интерфейсы, порт 8000, бандл рядом с рабочей директорией.
        let cfg = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", "8000")?
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = cfg.try_deserialize()?;

        // Валидация конфигурации
        config.validate()?;

        Ok(config)
    }

    /// Валидирует конфигурацию на наличие потенциальных проблем безопасности
    fn validate(&self) -> Result<(), config::ConfigError> {
        // Проверяем, что host не содержит подозрительных символов
        if !self
            .host
            .chars()
            .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher for security reasons".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Directory holding the prebuilt frontend bundle.
    pub fn effective_frontend_dir(&self) -> PathBuf {
        PathBuf::from(self.frontend_dir.as_deref().unwrap_or("frontend/build"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            frontend_dir: None,
        }
    }

    #[test]
    fn default_frontend_dir_points_at_build_bundle() {
        assert_eq!(
            base_config().effective_frontend_dir(),
            PathBuf::from("frontend/build")
        );
    }

    #[test]
    fn frontend_dir_override_is_honored() {
        let config = Config {
            frontend_dir: Some("/srv/app/build".to_string()),
            ..base_config()
        };
        assert_eq!(
            config.effective_frontend_dir(),
            PathBuf::from("/srv/app/build")
        );
    }

    #[test]
    fn rejects_host_with_suspicious_characters() {
        let config = Config {
            host: "evil;rm -rf".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_privileged_ports() {
        let config = Config {
            port: 80,
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_default_listen_address() {
        assert!(base_config().validate().is_ok());
    }
}
