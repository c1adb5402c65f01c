use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn file_writer(app_name: &str) -> Option<BoxMakeWriter> {
    let dir = std::path::PathBuf::from(std::env::var_os("HH_LOG_DIR")?);
    if let Err(error) = std::fs::create_dir_all(&dir) {
        eprintln!("hnhiring-core: cannot create HH_LOG_DIR ({error}); logging to stdout");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = FILE_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

/// Set up tracing for a consumer of this library: `RUST_LOG` filtering
/// (default `info`), stdout output, or daily-rotated files under
/// `HH_LOG_DIR` when that is set. Panics are routed through `tracing` so
/// extraction batch runs leave a record even when a caller bug crashes the
/// process. Calling this more than once is harmless.
pub fn init(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let initialized = match file_writer(app_name) {
        Some(writer) => builder.with_writer(writer).try_init().is_ok(),
        None => builder.try_init().is_ok(),
    };

    if initialized {
        install_panic_hook(app_name);
    }
}

fn install_panic_hook(app_name: &'static str) {
    static HOOK: OnceLock<()> = OnceLock::new();

    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());

            tracing::error!(application = app_name, %location, panic_message = %message, "panic captured");
            previous(info);
        }));
    });
}
