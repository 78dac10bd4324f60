use super::*;
use sc_core::MapEnv;

#[test]
fn test_render_php_uses_prefixed_values() {
    let env = MapEnv::new()
        .with("SUITECRM_DB_HOST", "mariadb")
        .with("DB_HOST", "ignored")
        .with("DB_PASSWORD", "it's-secret")
        .with("SUITECRM_WEB_PORT_HOST", "8443")
        .with("APP_SCHEME", "https");

    let php = render(&env, RenderFormat::Php).unwrap();

    assert!(php.starts_with("<?php"));
    assert!(php.contains("'db_host_name' => 'mariadb',"));
    assert!(php.contains("'db_password' => 'it\\'s-secret',"));
    assert!(php.contains("'db_port' => 3306,"));
    assert!(php.contains("$sugar_config['site_url'] = 'https://localhost:8443';"));
    assert!(php.contains("'enabled' => true,"));
}

#[test]
fn test_render_json() {
    let env = MapEnv::new().with("APP_DEBUG", "1").with("SMTP_PORT", "2525");

    let json = render(&env, RenderFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["logger_level"], "debug");
    assert_eq!(value["smtp"]["port"], 2525);
    assert_eq!(value["dbconfig"]["db_type"], "mysqli");
    assert_eq!(value["site_url"], "http://localhost:8080");
}

#[test]
fn test_render_rejects_bad_port() {
    let env = MapEnv::new().with("SUITECRM_REDIS_PORT", "redis");

    let err = render(&env, RenderFormat::Php).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("SUITECRM_REDIS_PORT"), "{chain}");
}
