//! Server configuration read from the environment (and an optional `.env`).
//!
//! | variable                   | default          |
//! |----------------------------|------------------|
//! | `SCHOOLS_HOST`             | `127.0.0.1`      |
//! | `SCHOOLS_PORT`             | `8080`           |
//! | `SCHOOLS_DATABASE_PATH`    | `schools.sqlite` |
//! | `SCHOOLS_OPEN_BROWSER`     | `false`          |
//! | `CLOUDINARY_CLOUD_NAME`    | unset            |
//! | `CLOUDINARY_UPLOAD_PRESET` | unset            |

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub open_browser: bool,
    pub cloudinary: CloudinarySettings,
}

/// Public parameters of the unsigned image upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloudinarySettings {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        let _ = dotenv::dotenv();
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let port = match get("SCHOOLS_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "SCHOOLS_PORT",
                value: value.to_string(),
            })?,
            None => 8080,
        };

        let open_browser = match get("SCHOOLS_OPEN_BROWSER") {
            Some(value) => parse_flag("SCHOOLS_OPEN_BROWSER", value)?,
            None => false,
        };

        Ok(Self {
            host: get("SCHOOLS_HOST").unwrap_or("127.0.0.1").to_string(),
            port,
            database_path: PathBuf::from(get("SCHOOLS_DATABASE_PATH").unwrap_or("schools.sqlite")),
            open_browser,
            cloudinary: CloudinarySettings {
                cloud_name: get("CLOUDINARY_CLOUD_NAME").map(str::to_string),
                upload_preset: get("CLOUDINARY_UPLOAD_PRESET").map(str::to_string),
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
