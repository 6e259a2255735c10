use chrono::Utc;
use rakshak_backend::{
    config::Config, db::connection::create_pool,
    repositories::password_reset as password_reset_repo,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_cleanup=info,rakshak_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let deleted_count = password_reset_repo::delete_expired_tokens(&pool, Utc::now())
        .await
        .map_err(|err| anyhow::anyhow!("cleanup expired password reset tokens: {:?}", err))?;
    if deleted_count > 0 {
        tracing::info!("Deleted {} expired password reset tokens", deleted_count);
    }

    sqlx::query("VACUUM (ANALYZE) password_resets")
        .execute(&pool)
        .await?;

    Ok(())
}
