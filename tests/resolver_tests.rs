use linksmart::services::{LinkRegistry, RedirectResolver};
use linksmart::storages::memory::MemoryStore;
use linksmart::storages::LinkStore;
use std::sync::Arc;

fn setup() -> (Arc<MemoryStore>, LinkRegistry, RedirectResolver) {
    let store = Arc::new(MemoryStore::new());
    let registry = LinkRegistry::new(store.clone());
    let resolver = RedirectResolver::new(store.clone());
    (store, registry, resolver)
}

#[cfg(test)]
mod resolve_tests {
    use super::*;

    #[test]
    fn test_resolve_returns_destination_and_records_click() {
        let (_, registry, resolver) = setup();
        let link = registry.create("https://example.com", "abc123", vec![]).unwrap();

        let target = resolver.resolve("abc123");
        assert_eq!(target.as_deref(), Some("https://example.com"));

        let updated = registry.find_by_id(&link.id).unwrap();
        assert_eq!(updated.total_clicks, 1);
        assert_eq!(updated.click_history.len(), 1);
    }

    #[test]
    fn test_resolve_nonexistent_returns_none_without_mutation() {
        let (store, registry, resolver) = setup();
        registry.create("https://example.com", "abc123", vec![]).unwrap();
        let before = store.load_all().unwrap();

        assert!(resolver.resolve("nonexistent").is_none());

        // 未命中不应触碰存储
        assert_eq!(store.load_all().unwrap(), before);
    }

    #[test]
    fn test_resolve_after_delete_misses() {
        let (_, registry, resolver) = setup();
        let link = registry.create("https://example.com", "abc123", vec![]).unwrap();

        registry.delete(&link.id);
        assert!(resolver.resolve("abc123").is_none());
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let (_, registry, resolver) = setup();
        registry.create("https://example.com", "abc123", vec![]).unwrap();

        assert!(resolver.resolve("ABC123").is_none());
        assert!(resolver.resolve("abc12").is_none());
    }

    #[test]
    fn test_repeated_resolution_accumulates_clicks() {
        let (_, registry, resolver) = setup();
        let link = registry.create("https://example.com", "abc123", vec![]).unwrap();

        for _ in 0..3 {
            resolver.resolve("abc123").unwrap();
        }

        assert_eq!(registry.find_by_id(&link.id).unwrap().total_clicks, 3);
    }
}

#[cfg(test)]
mod extract_alias_tests {
    use super::*;

    #[test]
    fn test_extracts_from_full_address() {
        assert_eq!(
            RedirectResolver::extract_alias("http://localhost:8080/#/abc123"),
            Some("abc123")
        );
    }

    #[test]
    fn test_extracts_from_bare_fragment() {
        assert_eq!(RedirectResolver::extract_alias("#/abc123"), Some("abc123"));
    }

    #[test]
    fn test_plain_alias_is_not_an_address() {
        assert_eq!(RedirectResolver::extract_alias("abc123"), None);
    }

    #[test]
    fn test_empty_fragment_is_none() {
        assert_eq!(RedirectResolver::extract_alias("http://localhost:8080/#/"), None);
        assert_eq!(RedirectResolver::extract_alias("#/"), None);
    }

    #[test]
    fn test_end_to_end_address_resolution() {
        let (_, registry, resolver) = setup();
        registry.create("https://example.com", "abc123", vec![]).unwrap();

        let address = "http://localhost:8080/#/abc123";
        let alias = RedirectResolver::extract_alias(address).unwrap();
        assert_eq!(
            resolver.resolve(alias).as_deref(),
            Some("https://example.com")
        );
    }
}
