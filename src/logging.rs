//! 日志初始化 (tracing)
//!
//! 日志写入 `~/.local/share/vibrant/logs/`，终端由 TUI 独占，不输出到 stdout。
//! 日志级别由环境变量 `VIBRANT_LOG` 控制，例如 `VIBRANT_LOG=debug`。

use std::fs;
use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

pub fn init() -> Result<()> {
    let log_dir = log_directory();
    fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "vibrant.log");

    let env_filter =
        EnvFilter::try_from_env("VIBRANT_LOG").unwrap_or_else(|_| EnvFilter::new("vibrant=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("vibrant 启动, 日志目录: {}", log_dir.display());
    Ok(())
}

/// 获取日志目录路径
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vibrant")
        .join("logs")
}
