use super::*;
use tempfile::TempDir;

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.server.name, "aob-hello");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.path, "/mcp");
    assert!(config.server.json_response);
}

#[test]
fn config_validation() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    let mut invalid_config = config.clone();
    invalid_config.server.port = 0;
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidPort(0))
    ));

    let mut invalid_config = config.clone();
    invalid_config.server.name = "   ".to_string();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidName(_))
    ));

    let mut invalid_config = config.clone();
    invalid_config.server.path = "mcp".to_string();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidPath(_))
    ));

    let mut invalid_config = config;
    invalid_config.server.host = "bad host".to_string();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidUrl(_))
    ));
}

#[test]
fn endpoint_url_generation() {
    let config = Config::default();
    let url = config
        .server
        .endpoint_url()
        .expect("should generate endpoint_url successfully");
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/mcp");
}

#[test]
fn empty_host_rejected() {
    let mut config = ServerConfig::default();
    config.host = String::new();
    assert!(config.endpoint_url().is_err());
}

#[test]
fn setter_validation() {
    let mut config = ServerConfig::default();

    assert!(config.set_name("tools".to_string()).is_ok());
    assert!(config.set_host("0.0.0.0".to_string()).is_ok());
    assert!(config.set_port(3000).is_ok());
    assert!(config.set_path("/rpc".to_string()).is_ok());
    assert_eq!(
        config.endpoint_url().expect("valid url").as_str(),
        "http://0.0.0.0:3000/rpc"
    );

    assert!(config.set_name(String::new()).is_err());
    assert!(config.set_host("not a host".to_string()).is_err());
    assert!(config.set_port(0).is_err());
    assert!(config.set_path("rpc".to_string()).is_err());

    // failed setters leave the previous value in place
    assert_eq!(config.name, "tools");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.path, "/rpc");
}

#[test]
fn toml_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("should serialize toml correctly");
    let parsed_config: Config = toml::from_str(&toml_str).expect("should parse toml correctly");
    assert_eq!(config, parsed_config);
}

#[test]
fn load_missing_config() {
    let temp_dir = TempDir::new().expect("should create temp dir");

    let config = Config::load(temp_dir.path()).expect("should load default config");
    assert_eq!(config.server, ServerConfig::default());
    assert_eq!(config.get_base_dir(), temp_dir.path());
}

#[test]
fn save_then_load() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let base_dir = temp_dir.path().join("nested");

    let mut config = Config {
        base_dir: base_dir.clone(),
        ..Default::default()
    };
    config.server.port = 9100;
    config.server.json_response = false;
    config.save().expect("should save config");

    assert!(base_dir.join("config.toml").exists());

    let loaded = Config::load(&base_dir).expect("should load saved config");
    assert_eq!(loaded, config);
}

#[test]
fn load_rejects_invalid_values() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "[server]\nport = 0\n",
    )
    .expect("should write config");

    assert!(Config::load(temp_dir.path()).is_err());
}

#[test]
fn save_rejects_invalid_values() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let mut config = Config {
        base_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    config.server.path = "no-slash".to_string();

    assert!(config.save().is_err());
    assert!(!temp_dir.path().join("config.toml").exists());
}
