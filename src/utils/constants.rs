use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
}

fn load_env() {
    dotenv().ok();
}

fn get_db_url() -> Secret<String> {
    Secret::new(load_or_default(
        env::DATABASE_URL_ENV_VAR,
        DEFAULT_DATABASE_URL,
    ))
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite:members.db?mode=rwc";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const DATABASE_URL: &str = "sqlite::memory:";
}
