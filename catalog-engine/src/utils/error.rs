//! 统一错误处理
//!
//! 应用级错误分类。索引查询的"未命中"用 `Option` 表达，这里只保留
//! 需要向调用方报告的错误。
//!
//! # 错误分类
//!
//! | 分类 | 说明 | 可恢复 |
//! |------|------|--------|
//! | NotFound | 请求的资源不在目录中 | 是 |
//! | Validation | 写入前的字段校验失败 | 是 |
//! | CapacityExceeded | 持久存储容量不足，写入被整体放弃 | 是 |
//! | Storage | 底层 redb 存储错误 | 否 |
//! | Internal | 其他内部错误 | 否 |

use thiserror::Error;

use crate::db::repository::RepoError;
use crate::db::storage::StorageError;

/// 应用错误枚举
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write was abandoned in full; nothing was persisted. The caller's
    /// in-memory state is still valid for a retry with a smaller payload or
    /// an external URL.
    #[error("Storage limit reached: {0}")]
    CapacityExceeded(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn capacity(message: impl Into<String>) -> Self {
        AppError::CapacityExceeded(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AppError::Storage(message.into())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CapacityExceeded { .. } => AppError::CapacityExceeded(
                "the image or file is too large to store locally; \
                 use a smaller file or an external URL"
                    .to_string(),
            ),
            other => {
                tracing::error!(error = %other, "storage error");
                AppError::Storage(other.to_string())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Storage(inner) => AppError::from(inner),
        }
    }
}

/// 应用 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
