use radium_client::{ApiError, ClientConfig, DEFAULT_BASE_URL};

#[test]
fn from_env_reads_key_and_default_url() {
    temp_env::with_vars(
        [("RADIUM_API_KEY", Some("env-key")), ("RADIUM_BASE_URL", None)],
        || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.api_key(), "env-key");
            assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        },
    );
}

#[test]
fn from_env_honors_base_url_override() {
    temp_env::with_vars(
        [
            ("RADIUM_API_KEY", Some("env-key")),
            ("RADIUM_BASE_URL", Some("http://localhost:3000/api/deploy/")),
        ],
        || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.base_url(), "http://localhost:3000/api/deploy");
        },
    );
}

#[test]
fn from_env_without_key_is_a_config_error() {
    temp_env::with_var_unset("RADIUM_API_KEY", || {
        assert!(matches!(ClientConfig::from_env(), Err(ApiError::Config(_))));
    });
}
