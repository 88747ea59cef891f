//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 使用本模块 Error 的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 参数不合法（例如从空列表中抽取）
    #[error("参数无效: {reason}")]
    InvalidArgument { reason: String },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败 {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("终端错误: {0}")]
    Terminal(String),
}

impl Error {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
