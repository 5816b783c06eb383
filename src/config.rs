//! Runtime settings read from the environment.

/// Connection string and bind address. `.env` loading happens at the
/// binary edge (dotenvy), before these reads.
#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://students.db".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        Settings {
            database_url,
            bind_addr,
        }
    }
}
