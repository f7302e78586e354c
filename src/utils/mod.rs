pub mod colors;
pub mod url_validator;

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 随机选择小写字母和数字
    let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";

    // 生成指定长度的随机字符串
    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// 规范化别名：去除首尾空白，空白折叠为 '-'，移除 [A-Za-z0-9_-] 以外的字符
pub fn normalize_alias(alias: &str) -> String {
    alias
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
