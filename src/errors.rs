use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkSmartError {
    AliasTaken(String),
    AliasTooShort(String),
    AliasSpaceExhausted(String),
    NotFound(String),
    StorageUnavailable(String),
    Serialization(String),
    Validation(String),
    StoragePluginNotFound(String),
}

impl LinkSmartError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkSmartError::AliasTaken(_) => "E001",
            LinkSmartError::AliasTooShort(_) => "E002",
            LinkSmartError::AliasSpaceExhausted(_) => "E003",
            LinkSmartError::NotFound(_) => "E004",
            LinkSmartError::StorageUnavailable(_) => "E005",
            LinkSmartError::Serialization(_) => "E006",
            LinkSmartError::Validation(_) => "E007",
            LinkSmartError::StoragePluginNotFound(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkSmartError::AliasTaken(_) => "Alias Taken",
            LinkSmartError::AliasTooShort(_) => "Alias Too Short",
            LinkSmartError::AliasSpaceExhausted(_) => "Alias Space Exhausted",
            LinkSmartError::NotFound(_) => "Resource Not Found",
            LinkSmartError::StorageUnavailable(_) => "Storage Unavailable",
            LinkSmartError::Serialization(_) => "Serialization Error",
            LinkSmartError::Validation(_) => "Validation Error",
            LinkSmartError::StoragePluginNotFound(_) => "Storage Plugin Not Found",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkSmartError::AliasTaken(msg) => msg,
            LinkSmartError::AliasTooShort(msg) => msg,
            LinkSmartError::AliasSpaceExhausted(msg) => msg,
            LinkSmartError::NotFound(msg) => msg,
            LinkSmartError::StorageUnavailable(msg) => msg,
            LinkSmartError::Serialization(msg) => msg,
            LinkSmartError::Validation(msg) => msg,
            LinkSmartError::StoragePluginNotFound(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use crate::utils::colors::{BOLD, RED, RESET, WHITE, YELLOW};
        format!(
            "{}{}[ERROR]{} {}{}{} {}{}{}\n  {}{}{}",
            BOLD,
            RED,
            RESET,
            YELLOW,
            self.code(),
            RESET,
            RED,
            self.error_type(),
            RESET,
            WHITE,
            self.message(),
            RESET
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 用户输入类错误，可在输入边界恢复
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LinkSmartError::AliasTaken(_)
                | LinkSmartError::AliasTooShort(_)
                | LinkSmartError::Validation(_)
        )
    }
}

impl fmt::Display for LinkSmartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkSmartError {}

// 便捷的构造函数
impl LinkSmartError {
    pub fn alias_taken<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::AliasTaken(msg.into())
    }

    pub fn alias_too_short<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::AliasTooShort(msg.into())
    }

    pub fn alias_space_exhausted<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::AliasSpaceExhausted(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::NotFound(msg.into())
    }

    pub fn storage_unavailable<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::StorageUnavailable(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::Validation(msg.into())
    }

    pub fn storage_plugin_not_found<T: Into<String>>(msg: T) -> Self {
        LinkSmartError::StoragePluginNotFound(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkSmartError {
    fn from(err: std::io::Error) -> Self {
        LinkSmartError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LinkSmartError {
    fn from(err: serde_json::Error) -> Self {
        LinkSmartError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkSmartError>;
