use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// html5ever 解析残缺页面时会刷大量 warn 以下日志
static DEFAULT_FILTER: &str = "info,html5ever=error,selectors=error";

static TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 日志级别由 RUST_LOG 控制
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt = tracing_subscriber::fmt::layer()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_owned()))
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(fmt).init();
}
