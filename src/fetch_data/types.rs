// ── Helpers ─────────────────────────────────────────────────────────

/// Retry an async operation with exponential backoff (1s, 2s, 4s, ...).
pub async fn retry<T, F, Fut>(max_retries: u32, f: F) -> anyhow::Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<T>>,
{
    let mut attempt = 0;
    loop {
        match f().await {
            Ok(val) => return Ok(val),
            Err(e) if attempt < max_retries => {
                let delay = std::time::Duration::from_millis(1000 * 2u64.pow(attempt));
                tracing::warn!(attempt = attempt + 1, ?delay, "request failed, retrying: {e:#}");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
