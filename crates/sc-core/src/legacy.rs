//! Legacy CRM configuration derived from the container environment
//!
//! SuiteCRM's legacy half reads `$sugar_config` overrides from
//! `config_override.php`. At container boot the orchestration layer only
//! provides environment variables, so this module resolves them into a typed
//! [`LegacyConfig`] that `sc-jinja` renders into that file.

use crate::env::{is_flag_set, EnvKey, EnvSource};
use crate::error::CoreResult;
use serde::Serialize;

const DB_HOST: EnvKey = EnvKey::new("SUITECRM_DB_HOST", "DB_HOST");
const DB_USER: EnvKey = EnvKey::new("SUITECRM_DB_USER", "DB_USER");
const DB_PASSWORD: EnvKey = EnvKey::new("SUITECRM_DB_PASSWORD", "DB_PASSWORD");
const DB_NAME: EnvKey = EnvKey::new("SUITECRM_DB_NAME", "DB_NAME");
const DB_PORT: EnvKey = EnvKey::new("SUITECRM_DB_PORT", "DB_PORT");
const REDIS_HOST: EnvKey = EnvKey::new("SUITECRM_REDIS_HOST", "REDIS_HOST");
const REDIS_PORT: EnvKey = EnvKey::new("SUITECRM_REDIS_PORT", "REDIS_PORT");
const SMTP_HOST: EnvKey = EnvKey::new("SUITECRM_SMTP_HOST", "SMTP_HOST");
const SMTP_PORT: EnvKey = EnvKey::new("SUITECRM_SMTP_PORT", "SMTP_PORT");
const ELASTIC_HOST: EnvKey = EnvKey::new("SUITECRM_ELASTIC_HOST", "ELASTIC_HOST");
const ELASTIC_PORT: EnvKey = EnvKey::new("SUITECRM_ELASTIC_PORT", "ELASTIC_PORT");
const LOG_LEVEL: EnvKey = EnvKey::new("MAIN_LOG_LEVEL", "LOGGER_LEVEL");
const SITE_URL: EnvKey = EnvKey::single("SITE_URL");
const WEB_SCHEME: EnvKey = EnvKey::single("APP_SCHEME");
const WEB_HOST: EnvKey = EnvKey::single("SUITECRM_WEB_HOST");
const WEB_PORT: EnvKey = EnvKey::new("SUITECRM_WEB_PORT_HOST", "SUITECRM_APP_PORT");
const APP_DEBUG: &str = "APP_DEBUG";

/// Complete set of legacy overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyConfig {
    pub dbconfig: DbConfig,
    pub session: SessionConfig,
    pub smtp: Endpoint,
    pub search: SearchConfig,
    pub logger_level: String,
    pub site_url: String,
    pub cache_dir: String,
    pub upload_dir: String,
    pub log_dir: String,
}

/// `$sugar_config['dbconfig']`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbConfig {
    pub db_host_name: String,
    pub db_user_name: String,
    pub db_password: String,
    pub db_name: String,
    pub db_type: String,
    pub db_manager: String,
    pub db_port: u16,
}

/// A host/port pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

/// Session storage; always redis-backed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    pub handler: String,
    pub redis: Endpoint,
}

/// Search engine settings; always Elasticsearch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub engine: String,
    pub host: String,
    pub port: u16,
    pub scheme: String,
    pub enabled: bool,
}

impl LegacyConfig {
    /// Resolve every setting from `env`.
    pub fn from_env(env: &dyn EnvSource) -> CoreResult<Self> {
        let dbconfig = DbConfig {
            db_host_name: DB_HOST.string_or(env, "db"),
            db_user_name: DB_USER.string_or(env, "suitecrm"),
            db_password: DB_PASSWORD.string_or(env, "secret"),
            db_name: DB_NAME.string_or(env, "suitecrm"),
            db_type: "mysqli".to_string(),
            db_manager: "MysqliManager".to_string(),
            db_port: DB_PORT.parse_or(env, 3306, "port")?,
        };

        let session = SessionConfig {
            handler: "redis".to_string(),
            redis: Endpoint {
                host: REDIS_HOST.string_or(env, "redis"),
                port: REDIS_PORT.parse_or(env, 6379, "port")?,
            },
        };

        let smtp = Endpoint {
            host: SMTP_HOST.string_or(env, "mailhog"),
            port: SMTP_PORT.parse_or(env, 1025, "port")?,
        };

        let search = SearchConfig {
            engine: "Elastic".to_string(),
            host: ELASTIC_HOST.string_or(env, "elasticsearch"),
            port: ELASTIC_PORT.parse_or(env, 9200, "port")?,
            scheme: "http".to_string(),
            enabled: true,
        };

        let logger_level = if is_flag_set(env, APP_DEBUG) {
            "debug".to_string()
        } else {
            LOG_LEVEL.string_or(env, "fatal")
        };

        Ok(Self {
            dbconfig,
            session,
            smtp,
            search,
            logger_level,
            site_url: site_url(env),
            cache_dir: "cache/".to_string(),
            upload_dir: "upload/".to_string(),
            log_dir: "logs/".to_string(),
        })
    }
}

/// `SITE_URL` verbatim, else `<scheme>://<host>:<port>`; trailing slashes trimmed.
fn site_url(env: &dyn EnvSource) -> String {
    let url = SITE_URL.lookup(env).map(|(_, v)| v).unwrap_or_else(|| {
        format!(
            "{}://{}:{}",
            WEB_SCHEME.string_or(env, "http"),
            WEB_HOST.string_or(env, "localhost"),
            WEB_PORT.string_or(env, "8080"),
        )
    });
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "legacy_test.rs"]
mod tests;
