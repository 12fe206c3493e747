use super::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn invalid_toml_handling() {
        let invalid_toml = r#"
            [server
            host = "localhost"
            port = "invalid_port"
        "#;

        let result: Result<Config, toml::de::Error> = toml::from_str(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_config_with_defaults() {
        let partial_toml = r#"
            [server]
            host = "0.0.0.0"
        "#;

        let config: Config = toml::from_str(partial_toml).expect("should parse toml successfully");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.name, "aob-hello");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").expect("should parse empty toml");
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn complete_valid_config() {
        let valid_toml = r#"
            [server]
            name = "tools"
            host = "localhost"
            port = 3000
            path = "/rpc"
            json_response = false
        "#;

        let config: Config = toml::from_str(valid_toml).expect("should parse toml successfully");
        assert_eq!(config.server.name, "tools");
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.path, "/rpc");
        assert!(!config.server.json_response);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_dir_is_under_home() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with(".hello-mcp"));
        }
    }
}
