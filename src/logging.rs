use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the tracing subscriber once.
///
/// Filtering is controlled through `EMOJI_COPIER_LOG`; `log`-based crates are
/// bridged into tracing.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_log::LogTracer::init();
        let filter = std::env::var("EMOJI_COPIER_LOG")
            .unwrap_or_else(|_| "emoji_copier=info,sqlx=warn".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
            .try_init();
    });
}
