//! Server configuration resolved from environment variables, with
//! compiled-in defaults for local use.

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "fieldify.sqlite";

pub fn host() -> String {
    env::var("FIELDIFY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn port() -> u16 {
    env::var("FIELDIFY_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn database_path() -> String {
    env::var("FIELDIFY_DB").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
}
