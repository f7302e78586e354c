//! URL 验证模块
//!
//! 验证目标 URL 安全性，阻止危险协议

use url::Url;

use crate::errors::{LinkSmartError, Result};

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 验证目标 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 不是危险协议（javascript:, data:, file: 等）
/// 3. 必须是 http:// 或 https://
/// 4. URL 格式有效
pub fn validate_url(url: &str) -> Result<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(LinkSmartError::validation("URL cannot be empty"));
    }

    let url_lower = url.to_lowercase();

    // 检查危险协议
    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(LinkSmartError::validation(format!(
                "Dangerous protocol blocked: {}",
                proto
            )));
        }
    }

    // 检查协议
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(LinkSmartError::validation(format!(
            "Invalid protocol: {}. Only http:// and https:// are allowed",
            proto
        )));
    }

    // 解析 URL 验证格式
    Url::parse(url)
        .map_err(|e| LinkSmartError::validation(format!("Invalid URL format: {}", e)))?;

    Ok(())
}
