use linksmart::errors::LinkSmartError;
use linksmart::storages::file::JsonFileStore;
use linksmart::storages::memory::MemoryStore;
use linksmart::storages::{ClickEntry, LinkRecord, LinkStore};
use std::fs;
use tempfile::TempDir;

fn sample_link(alias: &str) -> LinkRecord {
    LinkRecord {
        id: format!("id-{}", alias),
        original_url: "https://example.com".to_string(),
        alias: alias.to_string(),
        created_at: 1700000000000,
        total_clicks: 0,
        click_history: Vec::new(),
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod link_record_tests {
    use super::*;

    #[test]
    fn test_link_record_creation() {
        let link = sample_link("test123");

        assert_eq!(link.alias, "test123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert!(link.click_history.is_empty());
        assert!(link.tags.is_empty());
    }

    #[test]
    fn test_link_record_clone() {
        let original = sample_link("clone_test");
        let cloned = original.clone();

        assert_eq!(original, cloned);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let mut link = sample_link("serialize");
        link.total_clicks = 2;
        link.click_history.push(ClickEntry {
            date: "2025-06-01".to_string(),
            count: 2,
        });

        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"originalUrl\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"totalClicks\""));
        assert!(json.contains("\"clickHistory\""));
        assert!(json.contains("2025-06-01"));
    }

    #[test]
    fn test_deserialization_without_tags_defaults_to_empty() {
        // 旧数据可能没有 tags 字段
        let json = r#"{
            "id": "abc",
            "originalUrl": "https://example.com",
            "alias": "deserialize",
            "createdAt": 1700000000000,
            "totalClicks": 5,
            "clickHistory": [{"date": "2025-06-01", "count": 5}]
        }"#;

        let link: LinkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(link.alias, "deserialize");
        assert_eq!(link.total_clicks, 5);
        assert_eq!(link.click_history.len(), 1);
        assert!(link.tags.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut link = sample_link("round_trip");
        link.tags = vec!["auto".to_string(), "work".to_string()];
        link.total_clicks = 7;
        link.click_history = vec![
            ClickEntry {
                date: "2025-05-30".to_string(),
                count: 3,
            },
            ClickEntry {
                date: "2025-06-01".to_string(),
                count: 4,
            },
        ];

        let json = serde_json::to_string(&link).unwrap();
        let deserialized: LinkRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(link, deserialized);
    }
}

#[cfg(test)]
mod file_store_tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty_and_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("linksmart_data_v1.json");
        let store = JsonFileStore::with_path(path.to_str().unwrap());

        let links = store.load_all().unwrap();
        assert!(links.is_empty());
        // 空文件应当已经创建
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("links.json");
        let store = JsonFileStore::with_path(path.to_str().unwrap());

        let links = vec![sample_link("aaa111"), sample_link("bbb222")];
        store.save_all(&links).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, links);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("links.json");
        let store = JsonFileStore::with_path(path.to_str().unwrap());

        store.save_all(&[sample_link("first1")]).unwrap();
        store.save_all(&[sample_link("second")]).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].alias, "second");
    }

    #[test]
    fn test_corrupt_file_returns_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("links.json");
        fs::write(&path, "not valid json {").unwrap();

        let store = JsonFileStore::with_path(path.to_str().unwrap());
        let result = store.load_all();

        assert!(matches!(result, Err(LinkSmartError::Serialization(_))));
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("links.json");
        let store = JsonFileStore::with_path(path.to_str().unwrap());

        store.save_all(&[sample_link("gone")]).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());

        // 再次 clear 不应报错
        store.clear().unwrap();

        // 清空后重新加载得到空集合
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_backend_name() {
        let store = JsonFileStore::with_path("unused.json");
        assert_eq!(store.backend_name(), "file");
    }
}

#[cfg(test)]
mod memory_store_tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = MemoryStore::new();
        let links = vec![sample_link("aaa111"), sample_link("bbb222")];

        store.save_all(&links).unwrap();
        assert_eq!(store.load_all().unwrap(), links);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.save_all(&[sample_link("aaa111")]).unwrap();

        store.clear().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_backend_name() {
        let store = MemoryStore::new();
        assert_eq!(store.backend_name(), "memory");
    }
}
