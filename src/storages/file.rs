use std::fs;
use std::io::ErrorKind;

use tracing::{error, info};

use super::{LinkRecord, LinkStore};
use crate::config::get_config;
use crate::errors::{LinkSmartError, Result};

/// JSON 文件存储：整个集合序列化为一个带版本后缀的数据文件
///
/// 文件名中的 `_v1` 字面后缀用于将来的格式迁移（换文件即换版本）。
pub struct JsonFileStore {
    file_path: String,
}

impl JsonFileStore {
    pub fn new() -> Self {
        JsonFileStore {
            file_path: get_config().storage.data_file.clone(),
        }
    }

    /// 使用指定路径（测试和一次性工具使用）
    pub fn with_path<P: Into<String>>(path: P) -> Self {
        JsonFileStore {
            file_path: path.into(),
        }
    }

    fn load_from_file(&self) -> Result<Vec<LinkRecord>> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => match serde_json::from_str::<Vec<LinkRecord>>(&content) {
                Ok(links) => Ok(links),
                Err(e) => {
                    error!("解析链接文件失败: {}", e);
                    Err(LinkSmartError::serialization(format!(
                        "解析链接文件失败: {}",
                        e
                    )))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("链接文件不存在，创建空的存储");
                if let Err(e) = fs::write(&self.file_path, "[]") {
                    error!("创建链接文件失败: {}", e);
                    return Err(LinkSmartError::storage_unavailable(format!(
                        "创建链接文件失败: {}",
                        e
                    )));
                }
                info!("已创建空的链接文件: {}", self.file_path);
                Ok(Vec::new())
            }
            Err(e) => {
                error!("读取链接文件失败: {}", e);
                Err(LinkSmartError::storage_unavailable(format!(
                    "读取链接文件失败: {}",
                    e
                )))
            }
        }
    }

    fn save_to_file(&self, links: &[LinkRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(links)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<LinkRecord>> {
        self.load_from_file()
    }

    fn save_all(&self, links: &[LinkRecord]) -> Result<()> {
        self.save_to_file(links)
    }

    fn clear(&self) -> Result<()> {
        // 直接移除数据文件，下次 load 会重新创建空文件
        match fs::remove_file(&self.file_path) {
            Ok(()) => {
                info!("已清空链接文件: {}", self.file_path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("清空链接文件失败: {}", e);
                Err(LinkSmartError::storage_unavailable(format!(
                    "清空链接文件失败: {}",
                    e
                )))
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
