//! File logging bootstrap for the reminders core.
//!
//! # Responsibility
//! - Start rotating file logs once per process and keep the handle alive.
//! - Capture panics into the log with sanitized payloads.
//!
//! # Invariants
//! - Repeated init with the active configuration is a no-op.
//! - Init with a conflicting level or directory is rejected.
//! - Initialization itself never panics.

use std::path::{Path, PathBuf};
use std::sync::Once;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "placemind";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const BUILD_MODE: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: Once = Once::new();

struct ActiveLogging {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes file logging with the given level and absolute directory.
///
/// # Invariants
/// - Repeated calls with the active configuration are idempotent.
/// - A conflicting call returns an error and leaves logging untouched.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` is relative or cannot be created.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;
    let dir = normalize_log_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| -> Result<ActiveLogging, String> {
        let handle = start_file_logger(level, &dir)?;
        install_panic_hook();
        info!(
            "event=logging_init module=logging status=ok level={level} log_dir={} version={} build_mode={BUILD_MODE}",
            dir.display(),
            env!("CARGO_PKG_VERSION"),
        );
        Ok(ActiveLogging {
            level,
            log_dir: dir.clone(),
            _handle: handle,
        })
    })?;

    if active.level != level {
        return Err(format!(
            "logging already active with level `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    if active.log_dir != dir {
        return Err(format!(
            "logging already writing to `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            dir.display()
        ));
    }
    Ok(())
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_file_logger(level: &'static str, dir: &Path) -> Result<LoggerHandle, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("failed to create log directory `{}`: {err}", dir.display()))?;

    Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unknown log level `{other}`; use trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, String> {
    if log_dir.as_os_str().is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    if !log_dir.is_absolute() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            log_dir.display()
        ));
    }
    Ok(log_dir.to_path_buf())
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = match info.location() {
                Some(loc) => format!("{}:{}", loc.file(), loc.line()),
                None => "unknown".to_string(),
            };
            error!(
                "event=panic_captured module=logging status=error location={location} payload={}",
                panic_payload_summary(info)
            );
            previous(info);
        }));
    });
}

// Payloads can carry user-entered reminder text; flatten and clip them
// before they reach the log file.
fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let text = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "opaque panic payload".to_string());
    sanitize_message(&text, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut clipped: String = flat.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}

#[cfg(test)]
mod tests {
    use super::{init_logging, normalize_level, normalize_log_dir, sanitize_message};
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_log_dir(tag: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "placemind-logs-{tag}-{}-{stamp}",
            std::process::id()
        ))
    }

    #[test]
    fn level_aliases_normalize_and_unknown_levels_fail() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let error = normalize_log_dir(Path::new("logs/dev")).unwrap_err();
        assert!(error.contains("absolute"));
    }

    #[test]
    fn long_multiline_payloads_are_flattened_and_clipped() {
        let clipped = sanitize_message("line1\nline2\rline3", 8);
        assert!(!clipped.contains('\n'));
        assert!(!clipped.contains('\r'));
        assert!(clipped.ends_with("..."));
        assert_eq!(sanitize_message("ok", 8), "ok");
    }

    #[test]
    fn unsupported_level_never_activates_logging() {
        let dir = temp_log_dir("badlevel");
        let error = init_logging("verbose", &dir).unwrap_err();
        assert!(error.contains("log level"));
    }

    #[test]
    fn second_init_with_conflicting_config_is_rejected() {
        let first = temp_log_dir("first");
        let other = temp_log_dir("other");

        init_logging("info", &first).unwrap();
        init_logging("info", &first).unwrap();

        let level_conflict = init_logging("debug", &first).unwrap_err();
        assert!(level_conflict.contains("refusing to switch"));

        let dir_conflict = init_logging("info", &other).unwrap_err();
        assert!(dir_conflict.contains("refusing to switch"));
    }
}
