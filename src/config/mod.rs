use crate::util::common::{get_env_or, get_size_from_env_or, get_vec_from_env_or, load_dotenv};
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;
use tower_http::cors::{Any, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub mod db;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Basic app info
    pub app_name: String,
    pub app_version: String,

    // Server settings
    pub http: HTTPConfig,
    pub db: DBConfig,
    pub auth: AuthConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct HTTPConfig {
    pub ip: String,
    pub port: u16,
    pub max_body_size: u64,
    pub cors: CORSConfig,
}

#[derive(Debug, Clone)]
pub struct DBConfig {
    pub url: String,
    pub pool_size: u32,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct CORSConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: u64,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_requests: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let app_name = get_env_or("APP_NAME", "Folio".to_string()).unwrap();
        let app_version = get_env_or("APP_VERSION", "1.0.0".to_string()).unwrap();

        AppConfig {
            app_name,
            app_version,

            http: HTTPConfig::from_env(),
            db: DBConfig::from_env(),
            auth: AuthConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }

    pub fn validate_config(&self) {
        assert!(self.db.pool_size >= 1, "DATABASE_POOL_SIZE must be >= 1");
        assert!(
            self.auth.session_ttl_hours >= 1,
            "SESSION_TTL_HOURS must be >= 1"
        );
        // bcrypt rejects costs outside this range at runtime; fail at boot instead
        assert!(
            (4..=31).contains(&self.auth.bcrypt_cost),
            "BCRYPT_COST must be between 4 and 31"
        );
    }
}

impl HTTPConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let ip = get_env_or("HTTP_IP", "127.0.0.1".to_string()).unwrap();
        let port = get_env_or("HTTP_PORT", 5000).unwrap();
        let max_body_size = get_size_from_env_or("HTTP_MAX_BODY_SIZE", 1024 * 1024).unwrap();
        let cors = CORSConfig::from_env();

        HTTPConfig {
            ip,
            port,
            max_body_size,
            cors,
        }
    }
}

impl DBConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let url = get_env_or("DATABASE_URL", "portfolio.db".to_string()).unwrap();
        let pool_size = get_env_or("DATABASE_POOL_SIZE", 5).unwrap();
        let auto_migrate = get_env_or("DATABASE_AUTO_MIGRATE", true).unwrap();

        DBConfig {
            url,
            pool_size,
            auto_migrate,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let session_ttl_hours = get_env_or("SESSION_TTL_HOURS", 24).unwrap();
        let bcrypt_cost = get_env_or("BCRYPT_COST", 10).unwrap();

        AuthConfig {
            session_ttl_hours,
            bcrypt_cost,
        }
    }
}

impl CORSConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let allowed_origins = get_vec_from_env_or("CORS_ALLOWED_ORIGINS", vec![]).unwrap();
        let allowed_methods = get_vec_from_env_or(
            "CORS_ALLOWED_METHODS",
            strs_to_strings(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"]),
        )
        .unwrap();
        let allowed_headers = get_vec_from_env_or(
            "CORS_ALLOWED_HEADERS",
            vec!["Content-Type".to_string(), "Authorization".to_string()],
        )
        .unwrap();
        let allow_credentials = get_env_or("CORS_ALLOW_CREDENTIALS", false).unwrap();
        let max_age = get_env_or("CORS_MAX_AGE", 86400).unwrap();

        CORSConfig {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            allow_credentials,
            max_age,
        }
    }

    pub fn into_layer(self) -> CorsLayer {
        let mut cors = CorsLayer::new();

        cors = if self.allowed_origins.contains(&"*".to_string()) {
            cors.allow_origin(Any)
        } else {
            cors.allow_origin(AllowOrigin::list(convert_vec(self.allowed_origins.clone())))
        };

        cors = if self.allowed_methods.contains(&"*".to_string()) {
            cors.allow_methods(Any)
        } else {
            cors.allow_methods(AllowMethods::list(convert_vec(self.allowed_methods.clone())))
        };

        cors = if self.allowed_headers.contains(&"*".to_string()) {
            cors.allow_headers(Any)
        } else {
            cors.allow_headers(AllowHeaders::list(convert_vec(self.allowed_headers.clone())))
        };

        cors = cors
            .allow_credentials(self.allow_credentials)
            .max_age(Duration::from_secs(self.max_age));

        cors
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let log_requests = get_env_or("LOG_REQUESTS", false).unwrap();

        LogConfig { log_requests }
    }
}

// convert vectors of &str to owned Strings
fn strs_to_strings(vec: Vec<&str>) -> Vec<String> {
    vec.into_iter().map(|s| s.to_string()).collect()
}

// Helper function to convert Vec<String> to Vec<T>
fn convert_vec<T: FromStr>(strings: Vec<String>) -> Vec<T>
where
    <T as FromStr>::Err: Debug,
{
    strings.into_iter().map(|s| s.parse().unwrap()).collect()
}
