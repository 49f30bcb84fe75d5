#[cfg(test)]
mod tests {
    use crate::configs::ThemeConfig;
    use crate::controller::ThemeController;
    use crate::error::ThemeError;
    use crate::storage::MemoryStore;
    use crate::tests::common::mocks::{ FailingStore, FixedSignal, RecordingSurface };
    use crate::tests::common::{ assert_consistent, controller, stored };
    use crate::utils::ThemeState;

    #[test]
    fn apply_dark_is_idempotent() {
        let mut c = controller(None, None);
        c.apply_theme(ThemeState::Dark).unwrap();
        assert_consistent(&c, ThemeState::Dark);
        c.apply_theme(ThemeState::Dark).unwrap();
        assert_consistent(&c, ThemeState::Dark);
    }

    #[test]
    fn apply_light_unmarks_root_and_swaps_icons() {
        let mut c = controller(None, None);
        c.apply_theme(ThemeState::Dark).unwrap();
        c.apply_theme(ThemeState::Light).unwrap();
        let surface = c.surface();
        assert!(!surface.root_dark);
        assert_eq!(surface.dark_icon_visible, Some(true));
        assert_eq!(surface.light_icon_visible, Some(false));
        assert_consistent(&c, ThemeState::Light);
    }

    #[test]
    fn apply_persists_even_when_unchanged() {
        let mut c = controller(Some("light"), None);
        c.store_mut().remove("theme");
        c.apply_theme(ThemeState::Light).unwrap();
        assert_eq!(stored(&c).as_deref(), Some("light"));
    }

    #[test]
    fn surface_failure_is_reported_and_nothing_is_stored() {
        let mut c = ThemeController::new(
            MemoryStore::new(),
            RecordingSurface { fail: true, ..RecordingSurface::default() },
            FixedSignal(None),
            &ThemeConfig::default()
        );
        let err = c.apply_theme(ThemeState::Dark).unwrap_err();
        assert!(matches!(err, ThemeError::Dom(_)));
        assert_eq!(stored(&c), None);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn failed_write_still_tracks_the_theme_on_screen() {
        let config = ThemeConfig::default();
        let mut store = FailingStore::default();
        store.inner = MemoryStore::with_value(&config.storage_key, "light");
        store.fail_writes = true;
        let mut c = ThemeController::new(store, RecordingSurface::default(), FixedSignal(None), &config);

        let err = c.apply_theme(ThemeState::Dark).unwrap_err();
        assert!(matches!(err, ThemeError::Storage(_)));
        assert!(c.surface().root_dark);
        assert_eq!(c.current(), Some(ThemeState::Dark));

        // Stale "light" in storage must not pin the page to dark
        let err = c.toggle_theme().unwrap_err();
        assert!(matches!(err, ThemeError::Storage(_)));
        assert!(!c.surface().root_dark);
        assert_eq!(c.surface().dark_icon_visible, Some(true));
        assert_eq!(c.surface().light_icon_visible, Some(false));
        assert_eq!(c.current(), Some(ThemeState::Light));
    }

    #[test]
    fn icon_failure_part_way_leaves_current_and_storage_alone() {
        let mut c = ThemeController::new(
            MemoryStore::new(),
            RecordingSurface { fail_after: Some(2), ..RecordingSurface::default() },
            FixedSignal(None),
            &ThemeConfig::default()
        );
        let err = c.apply_theme(ThemeState::Dark).unwrap_err();
        assert!(matches!(err, ThemeError::Dom(_)));
        assert!(c.surface().root_dark);
        assert_eq!(c.surface().dark_icon_visible, Some(false));
        assert_eq!(c.surface().light_icon_visible, None);
        assert_eq!(stored(&c), None);
        assert_eq!(c.current(), None);
    }
}
