// GUI用ユーティリティ関数

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{project_dirs, LogConfig};

/// ログファイル名の接頭辞（日付はtracing-appenderが付与）
pub const LOG_FILE_PREFIX: &str = "tubelens.log";

/// 3桁区切りの数値表示
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

/// グラフのラベル用に長いタイトルを切り詰める
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// 時刻フォーマット
pub fn format_timestamp(time: &chrono::DateTime<chrono::Utc>) -> String {
    time.with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// ログディレクトリの解決（未指定ならXDGデータディレクトリ配下）
pub fn resolve_log_dir(config: &LogConfig) -> anyhow::Result<PathBuf> {
    match &config.log_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(project_dirs()?.data_local_dir().join("logs")),
    }
}

/// 古いログファイルを削除し、最新 `max_files` 件だけ残す。削除数を返す
pub fn cleanup_old_logs(log_dir: &Path, max_files: usize) -> usize {
    let pattern = log_dir.join(format!("{}*", LOG_FILE_PREFIX));
    let pattern = pattern.to_string_lossy();

    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.flatten().filter(|p| p.is_file()).collect(),
        Err(e) => {
            warn!("Invalid log file pattern {}: {}", pattern, e);
            return 0;
        }
    };

    if files.len() <= max_files {
        return 0;
    }

    // 日付サフィックスなので名前順 = 古い順
    files.sort();
    let excess = files.len() - max_files;
    let mut removed = 0;

    for path in files.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("🗑️ Removed old log file: {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("Failed to remove log file {}: {}", path.display(), e),
        }
    }

    removed
}

/// ログ初期化。ファイル出力が有効な場合は返されたガードをプロセス終了まで保持すること
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let (file_layer, guard) = if config.enable_file_logging {
        let log_dir = resolve_log_dir(config)?;
        fs::create_dir_all(&log_dir).with_context(|| {
            format!("Failed to create log directory: {}", log_dir.display())
        })?;

        if config.max_log_files > 0 {
            cleanup_old_logs(&log_dir, config.max_log_files);
        }

        let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// エラー詳細のログ
pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    tracing::error!(
        context = context,
        error = %error,
        error_chain = ?error.chain().collect::<Vec<_>>(),
        "❌ Error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(100_000), "100,000");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a very long video title", 8), "a very …");
        assert_eq!(truncate_label("日本語のタイトルです", 5), "日本語の…");
    }

    #[test]
    fn test_cleanup_old_logs_keeps_newest() {
        let dir = tempdir().unwrap();
        for day in 1..=5 {
            fs::write(
                dir.path().join(format!("{}.2026-01-0{}", LOG_FILE_PREFIX, day)),
                "log",
            )
            .unwrap();
        }
        fs::write(dir.path().join("unrelated.txt"), "keep").unwrap();

        let removed = cleanup_old_logs(dir.path(), 2);

        assert_eq!(removed, 3);
        assert!(dir.path().join("tubelens.log.2026-01-04").exists());
        assert!(dir.path().join("tubelens.log.2026-01-05").exists());
        assert!(!dir.path().join("tubelens.log.2026-01-01").exists());
        assert!(dir.path().join("unrelated.txt").exists());
    }

    #[test]
    fn test_cleanup_old_logs_under_limit() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tubelens.log.2026-01-01"), "log").unwrap();
        assert_eq!(cleanup_old_logs(dir.path(), 30), 0);
    }

    #[test]
    fn test_resolve_log_dir_custom() {
        let config = LogConfig {
            log_dir: Some(PathBuf::from("/tmp/tubelens-logs")),
            ..LogConfig::default()
        };
        assert_eq!(
            resolve_log_dir(&config).unwrap(),
            PathBuf::from("/tmp/tubelens-logs")
        );
    }
}
