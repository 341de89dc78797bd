//! Property-based tests for the breadcrumb and page cache.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use pageflow::cache::{CacheKey, PageCache};
use pageflow::core::{Breadcrumb, Direction};
use pageflow::dom::{DomBackend, NodeId};
use pageflow::page::{Page, PageHandle, PagePolicy};
use proptest::prelude::*;
use std::rc::Rc;

const ROOT: &str = "signin";

struct TestPage {
    element: NodeId,
}

impl TestPage {
    fn handle(policy: PagePolicy) -> PageHandle {
        PageHandle::new(
            Box::new(Self {
                element: NodeId::new(),
            }),
            policy,
        )
    }
}

impl Page for TestPage {
    fn element(&self) -> NodeId {
        self.element
    }

    fn render_view(&mut self, _dom: &mut dyn DomBackend) {}
}

prop_compose! {
    fn arbitrary_action()(variant in 0..5u8) -> String {
        match variant {
            0 => ROOT.to_string(),
            1 => "index".to_string(),
            2 => "about".to_string(),
            3 => "contact".to_string(),
            _ => "setting".to_string(),
        }
    }
}

prop_compose! {
    fn arbitrary_flat_key()(variant in 0..4u8) -> String {
        match variant {
            0 => "index".to_string(),
            1 => "about".to_string(),
            2 => "profile".to_string(),
            _ => "setting".to_string(),
        }
    }
}

proptest! {
    #[test]
    fn breadcrumb_always_starts_at_root(
        actions in prop::collection::vec(arbitrary_action(), 1..20)
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        prop_assert_eq!(breadcrumb.actions()[0], ROOT);
    }

    #[test]
    fn record_grows_history_by_at_most_two(
        actions in prop::collection::vec(arbitrary_action(), 1..20)
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            let before = breadcrumb.len();
            breadcrumb.record(action);
            let grown = breadcrumb.len() - before;
            // Only the seeding record adds two entries.
            prop_assert!(grown == 1 || (grown == 2 && before == 0));
        }
    }

    #[test]
    fn direction_is_deterministic(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        coming in arbitrary_action()
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        prop_assert_eq!(
            breadcrumb.direction_of(&coming),
            breadcrumb.direction_of(&coming)
        );
    }

    #[test]
    fn returning_to_root_is_always_back(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        prop_assert_eq!(breadcrumb.direction_of(ROOT), Direction::Back);
    }

    #[test]
    fn direction_ignores_unvisited_actions(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        // An action that never ran cannot be anyone's parent.
        prop_assert_eq!(breadcrumb.direction_of("never-visited"), Direction::Forward);
    }

    #[test]
    fn truncation_clears_exactly_the_near_root_returns(
        actions in prop::collection::vec(arbitrary_action(), 1..20),
        coming in arbitrary_action()
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        let first_index = breadcrumb
            .actions()
            .iter()
            .position(|a| *a == coming);
        let cleared = breadcrumb.try_truncate(&coming);

        match first_index {
            Some(i) if i <= 1 => {
                prop_assert!(cleared);
                prop_assert!(breadcrumb.is_empty());
            }
            _ => {
                prop_assert!(!cleared);
                prop_assert!(!breadcrumb.is_empty());
            }
        }
    }

    #[test]
    fn breadcrumb_roundtrip_serialization(
        actions in prop::collection::vec(arbitrary_action(), 0..10)
    ) {
        let mut breadcrumb = Breadcrumb::new(ROOT);
        for action in &actions {
            breadcrumb.record(action);
        }

        let json = serde_json::to_string(&breadcrumb).unwrap();
        let deserialized: Breadcrumb = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(breadcrumb.actions(), deserialized.actions());
    }

    #[test]
    fn cache_returns_the_same_instance_per_key(key in arbitrary_flat_key()) {
        let mut cache = PageCache::new();
        let key = CacheKey::from(key);

        let first = cache.get_or_create(&key, || TestPage::handle(PagePolicy::cacheable()));
        let second = cache.get_or_create(&key, || TestPage::handle(PagePolicy::cacheable()));

        prop_assert!(Rc::ptr_eq(&first, &second));
        prop_assert_eq!(cache.len(), 1);
    }

    #[test]
    fn flat_invalidation_leaves_no_prefixed_keys(
        base in arbitrary_flat_key(),
        suffixes in prop::collection::vec("[a-z]{1,6}", 0..5)
    ) {
        let mut cache = PageCache::new();
        let unrelated = CacheKey::from("unrelated");
        cache.get_or_create(&unrelated, || TestPage::handle(PagePolicy::cacheable()));
        cache.get_or_create(&CacheKey::from(base.as_str()), || {
            TestPage::handle(PagePolicy::cacheable())
        });
        for suffix in &suffixes {
            cache.get_or_create(&CacheKey::from(format!("{base}/{suffix}")), || {
                TestPage::handle(PagePolicy::cacheable())
            });
        }

        cache.invalidate(&CacheKey::from(base.as_str()));

        let prefix = format!("{base}/");
        prop_assert!(!cache.contains(&CacheKey::from(base.as_str())));
        prop_assert!(cache
            .keys()
            .all(|k| !k.as_str().starts_with(&prefix) && k.as_str() != base));
        prop_assert!(cache.contains(&unrelated));
    }

    #[test]
    fn composite_invalidation_is_exact(
        base in arbitrary_flat_key(),
        suffixes in prop::collection::vec("[a-z]{1,6}", 2..5)
    ) {
        let mut cache = PageCache::new();
        for suffix in &suffixes {
            cache.get_or_create(&CacheKey::from(format!("{base}/{suffix}")), || {
                TestPage::handle(PagePolicy::cacheable())
            });
        }
        let target = CacheKey::from(format!("{base}/{}", suffixes[0]));
        let population = cache.len();

        let removed = cache.invalidate(&target);

        prop_assert_eq!(removed, 1);
        prop_assert!(!cache.contains(&target));
        prop_assert_eq!(cache.len(), population - 1);
    }
}
