use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub quizzes_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Fixed seed for random question selection. Entropy-seeded when unset.
    pub random_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quiz-api-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            random_seed: env::var("RANDOM_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "quiz-api-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origins: vec![],
            random_seed: Some(42),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_conn_string.expose_secret().is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.quizzes_collection.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "quiz-api-test");
        assert_eq!(config.quizzes_collection, "quizzes");
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:3000, ,https://quiz.example.com,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://quiz.example.com"]
        );
    }
}
