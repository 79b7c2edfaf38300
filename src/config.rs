use std::env;

/// Where the order store lives.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
}

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DB: &str = "orders";

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads settings from the environment, after merging a `.env` file when one
/// exists.
pub fn load() -> Settings {
    dotenvy::dotenv().ok();

    Settings {
        mongodb_uri: var_or("MONGODB_URI", DEFAULT_MONGODB_URI),
        mongodb_db: var_or("MONGODB_DB", DEFAULT_MONGODB_DB),
    }
}
