use grpc_hello::config::Config;

#[test]
fn test_default_client_target_matches_default_listen_port() {
    let config = Config::default();
    assert_eq!(config.server.listen_port, 50051);
    assert_eq!(config.client.target, "http://127.0.0.1:50051");
}

#[test]
fn test_client_target_usable_with_system_assigned_listen_port() {
    // 服务端用系统分配端口时,客户端目标仍然是显式配置的地址
    let config: Config = toml::from_str(
        r#"
        [server]
        listen_port = 0

        [client]
        target = "http://127.0.0.1:50051"
        "#,
    )
    .expect("Failed to parse config");

    assert_eq!(config.server.listen_port, 0);
    assert_eq!(config.client.target, "http://127.0.0.1:50051");
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [registry]
        host = "10.0.0.8"
        "#,
    )
    .expect("Failed to parse config");

    assert_eq!(config.registry.host, "10.0.0.8");
    assert_eq!(config.registry.port, 8848);
    assert_eq!(config.server.service_name, "grpc.hello.service");
}
