//! End-to-end behaviour of the sub-path resolver.

use std::collections::HashMap;
use std::sync::Arc;

use subpath_alias::alias::AliasTable;
use subpath_alias::routing::{OutboundOptions, SubpathResolver};

mod common;

use common::{fixture_table, FailingResolver, RecordingResolver, StorageError, TaggingResolver};

#[test]
fn test_inbound_subpaths_of_aliases() {
    let resolver = SubpathResolver::new(fixture_table());

    // Sub-path of 'content/first-node'
    let processed = resolver
        .resolve_inbound("/content/first-node/a", "/content/first-node/a")
        .unwrap();
    assert_eq!(processed, "/node/1/a");

    // Sub-path of 'content/first-node-test'
    let processed = resolver
        .resolve_inbound("/content/first-node-test/a", "/content/first-node-test/a")
        .unwrap();
    assert_eq!(processed, "/node/1/test/a");

    // Admin-looking sub-paths are not filtered
    let processed = resolver
        .resolve_inbound("/content/first-node/edit", "/content/first-node/edit")
        .unwrap();
    assert_eq!(processed, "/node/1/edit");

    let processed = resolver
        .resolve_inbound("/malicious-path/modules", "/malicious-path/modules")
        .unwrap();
    assert_eq!(processed, "/admin/modules");
}

#[test]
fn test_inbound_already_processed_skips_delegate() {
    let delegate = RecordingResolver::new(fixture_table());
    let resolver = SubpathResolver::new(&delegate);

    let processed = resolver.resolve_inbound("/node/1", "/content/first-node").unwrap();
    assert_eq!(processed, "/node/1");
    assert_eq!(delegate.calls(), 0);
}

#[test]
fn test_single_segment_never_delegates() {
    let delegate = RecordingResolver::new(fixture_table());
    let resolver = SubpathResolver::new(&delegate);

    assert_eq!(resolver.resolve_inbound("/content", "/content").unwrap(), "/content");
    let mut options = OutboundOptions::new();
    assert_eq!(resolver.resolve_outbound("/node", &mut options).unwrap(), "/node");
    assert_eq!(delegate.calls(), 0);
}

#[test]
fn test_peels_one_segment_at_a_time() {
    let delegate = RecordingResolver::new(fixture_table());
    let resolver = SubpathResolver::new(&delegate);

    let processed = resolver
        .resolve_inbound("/content/first-node/a/b/c", "/content/first-node/a/b/c")
        .unwrap();
    assert_eq!(processed, "/node/1/a/b/c");
    assert_eq!(
        delegate.seen(),
        vec!["/content/first-node/a/b", "/content/first-node/a", "/content/first-node"]
    );
}

#[test]
fn test_unaliased_path_tries_every_ancestor() {
    let delegate = RecordingResolver::new(fixture_table());
    let resolver = SubpathResolver::new(&delegate);

    let processed = resolver.resolve_inbound("/user/5/edit", "/user/5/edit").unwrap();
    assert_eq!(processed, "/user/5/edit");
    assert_eq!(delegate.seen(), vec!["/user/5", "/user"]);
}

#[test]
fn test_deepest_aliased_ancestor_wins() {
    let table = AliasTable::new()
        .with_alias("/docs", "/book/1")
        .with_alias("/docs/install", "/node/42");
    let resolver = SubpathResolver::new(table);

    assert_eq!(
        resolver
            .resolve_inbound("/docs/install/linux", "/docs/install/linux")
            .unwrap(),
        "/node/42/linux"
    );
    assert_eq!(
        resolver.resolve_inbound("/docs/faq/linux", "/docs/faq/linux").unwrap(),
        "/book/1/faq/linux"
    );
}

#[test]
fn test_outbound_subpaths() {
    let resolver = SubpathResolver::new(fixture_table());
    let mut options = OutboundOptions::new();

    assert_eq!(
        resolver.resolve_outbound("/node/1/edit", &mut options).unwrap(),
        "/content/first-node/edit"
    );
    assert_eq!(
        resolver.resolve_outbound("/admin/modules/list", &mut options).unwrap(),
        "/malicious-path/modules/list"
    );
    assert_eq!(resolver.resolve_outbound("/node/2/edit", &mut options).unwrap(), "/node/2/edit");
}

#[test]
fn test_outbound_absolute_bypasses_delegate() {
    let delegate = RecordingResolver::new(fixture_table());
    let resolver = SubpathResolver::new(&delegate);
    let mut options = OutboundOptions::absolute();

    assert_eq!(resolver.resolve_outbound("/node/1/edit", &mut options).unwrap(), "/node/1/edit");
    assert_eq!(delegate.calls(), 0);
}

#[test]
fn test_outbound_options_shared_with_every_lookup() {
    let delegate = TaggingResolver {
        aliases: HashMap::from([("/node/1".to_string(), "/content/first-node".to_string())]),
    };
    let resolver = SubpathResolver::new(delegate);
    let mut options = OutboundOptions::new();

    let path = resolver.resolve_outbound("/node/1/edit/extra", &mut options).unwrap();
    assert_eq!(path, "/content/first-node/edit/extra");

    let tags: Vec<_> = options.metadata.cache_tags.iter().cloned().collect();
    assert_eq!(tags, vec!["lookup:/node/1", "lookup:/node/1/edit"]);
}

#[test]
fn test_delegate_errors_propagate_unchanged() {
    let resolver = SubpathResolver::new(FailingResolver {
        broken: vec!["/content/first-node".to_string()],
    });

    let err = resolver
        .resolve_inbound("/content/first-node/edit", "/content/first-node/edit")
        .unwrap_err();
    assert_eq!(err, StorageError("/content/first-node".to_string()));

    // Lookups that never reach the broken prefix succeed
    assert_eq!(
        resolver.resolve_inbound("/content", "/content").unwrap(),
        "/content"
    );
}

#[test]
fn test_round_trip_at_ancestor_level() {
    let resolver = SubpathResolver::new(fixture_table());
    for path in ["/content/first-node/edit", "/malicious-path/modules/list"] {
        let canonical = resolver.resolve_inbound(path, path).unwrap();
        let mut options = OutboundOptions::new();
        let alias = resolver.resolve_outbound(&canonical, &mut options).unwrap();
        assert_eq!(alias, path);
    }
}

#[test]
fn test_shared_across_threads() {
    let resolver = Arc::new(SubpathResolver::new(fixture_table()));

    std::thread::scope(|s| {
        for i in 0..8 {
            let resolver = Arc::clone(&resolver);
            s.spawn(move || {
                let path = format!("/content/first-node/{i}");
                let resolved = resolver.resolve_inbound(&path, &path).unwrap();
                assert_eq!(resolved, format!("/node/1/{i}"));
            });
        }
    });
}
