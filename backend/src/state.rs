use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    utils::email::{EmailService, Mailer},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            pool,
            config,
            mailer,
        }
    }

    /// Builds the state with the SMTP mailer described by `config`.
    pub fn with_smtp(pool: DbPool, config: Config) -> anyhow::Result<Self> {
        let mailer = EmailService::new(&config.smtp)?;
        Ok(Self::new(pool, config, Arc::new(mailer)))
    }
}
