use std::sync::RwLock;

use super::{LinkRecord, LinkStore};
use crate::errors::Result;

/// 内存存储：与文件后端同一契约，但不落盘
///
/// 用于测试和一次性运行，进程退出后数据即消失。
pub struct MemoryStore {
    links: RwLock<Vec<LinkRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            links: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<LinkRecord>> {
        let guard = self.links.read().unwrap();
        Ok(guard.clone())
    }

    fn save_all(&self, links: &[LinkRecord]) -> Result<()> {
        let mut guard = self.links.write().unwrap();
        *guard = links.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.links.write().unwrap();
        guard.clear();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
