// ============================================================================
// Chroma - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 配置、会话、交互三类错误定义
// 边界:
//   - ✅ 错误枚举和显示信息
//   - ❌ 不应包含错误恢复逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::models::session::{SessionKey, SessionState};

/// 启动配置错误，出现时不会尝试连接聊天平台
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingToken(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 选择会话错误：事件指向的会话无法再接受操作
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(SessionKey),

    #[error("session {0} expired")]
    Expired(SessionKey),

    #[error("session is {0}, no further changes accepted")]
    Closed(SessionState),

    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: &'static str, value: String },
}

/// 交互处理错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("missing command option: {0}")]
    MissingOption(&'static str),

    #[error("invalid value for option {name}: {value}")]
    InvalidOption { name: &'static str, value: String },

    #[error("malformed component id: {0}")]
    MalformedComponent(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}
