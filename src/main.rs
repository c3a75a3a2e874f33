use static_httpd::config::Config;
use static_httpd::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log_level)
        .init();

    let mut pool = server::start(&cfg)?;

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("Shutdown signal received");
        }

        _ = pool.stopped() => {
            tracing::warn!("All workers exited");
        }
    }

    pool.shutdown();
    tokio::task::spawn_blocking(move || pool.join()).await?;
    tracing::info!("Exit");

    Ok(())
}
