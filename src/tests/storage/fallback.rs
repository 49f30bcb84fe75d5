#[cfg(test)]
mod tests {
    use crate::storage::{ FallbackStore, MemoryStore, ThemeStore };
    use crate::error::ThemeError;
    use crate::tests::common::mocks::FailingStore;
    use crate::tests::common::setup;

    #[test]
    fn healthy_store_is_written_through() {
        setup();
        let mut store = FallbackStore::new(MemoryStore::new());
        store.set("theme", "dark").unwrap();
        assert!(store.is_durable());
        assert_eq!(store.durable().unwrap().get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn write_failure_degrades_to_memory_for_good() {
        setup();
        let failing = FailingStore { fail_writes: true, ..FailingStore::default() };
        let mut store = FallbackStore::new(failing);
        store.set("theme", "dark").unwrap();
        assert!(!store.is_durable());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn read_failure_falls_back_without_error() {
        setup();
        let failing = FailingStore { fail_reads: true, ..FailingStore::default() };
        let store = FallbackStore::new(failing);
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn unavailable_store_starts_memory_only() {
        setup();
        let store: FallbackStore<MemoryStore> =
            FallbackStore::from_result(Err(ThemeError::Storage("null".to_string())));
        assert!(!store.is_durable());
        let mut store = store;
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn durable_value_is_read_back_on_next_load() {
        let mut durable = MemoryStore::new();
        durable.set("theme", "dark").unwrap();
        let store = FallbackStore::new(durable);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn read_failure_stops_later_writes_reaching_durable_store() {
        setup();
        let failing = FailingStore { fail_reads: true, ..FailingStore::default() };
        let mut store = FallbackStore::new(failing);
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(!store.is_durable());
        store.set("theme", "dark").unwrap();
        assert!(store.durable().is_none());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
