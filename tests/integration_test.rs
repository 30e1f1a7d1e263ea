/// End-to-end integration tests for the index, lookup, and read-through cache
mod common;

use std::sync::Arc;
use std::time::Duration;

use blog_content_index::{ContentService, build_index, load_post};
use common::{ContentTreeBuilder, touch_future};

#[test]
fn test_full_tree_indexes_all_posts() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello-world", "# Hello World\n\nIntro #rust #blog")
        .with_post("2026", "February", "05", "second", "# Second Post\n\n#rust")
        .with_post("2025", "December", "31", "year-end", "# Year End\n\n#retro")
        .build();

    let index = build_index(content.path());

    assert_eq!(index.posts.len(), 3);
    assert_eq!(index.posts[0].id, "2026/February/10/hello-world");
    assert_eq!(index.posts[1].id, "2026/February/05/second");
    assert_eq!(index.posts[2].id, "2025/December/31/year-end");

    let rust = index.tags.iter().find(|t| t.tag == "rust").unwrap();
    assert_eq!(rust.count, 2);
}

#[test]
fn test_index_serializes_to_wire_shape() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello\n\n#rust")
        .build();

    let index = build_index(content.path());
    let value = serde_json::to_value(&index).unwrap();

    let posts = value.get("posts").and_then(|p| p.as_array()).unwrap();
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.get("id").unwrap(), "2026/February/10/hello");
    assert_eq!(post.get("title").unwrap(), "Hello");
    assert_eq!(post.get("date_path").unwrap(), "2026/February/10");
    assert!(post.get("tags").unwrap().is_array());

    let tags = value.get("tags").and_then(|t| t.as_array()).unwrap();
    assert_eq!(tags[0].get("tag").unwrap(), "rust");
    assert_eq!(tags[0].get("count").unwrap(), 1);
}

#[test]
fn test_post_serializes_to_wire_shape() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello\n\nBody")
        .build();

    let post = load_post(content.path(), "2026/February/10/hello").unwrap();
    let value = serde_json::to_value(&post).unwrap();

    assert_eq!(value.get("id").unwrap(), "2026/February/10/hello");
    assert_eq!(value.get("title").unwrap(), "Hello");
    assert_eq!(value.get("date_path").unwrap(), "2026/February/10");
    assert!(value.get("markdown").unwrap().as_str().unwrap().contains("Body"));
}

#[test]
fn test_service_serves_cached_index_for_unchanged_tree() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello")
        .build();
    let service = ContentService::new(content.path(), Duration::from_secs(3600));

    let first = service.index();
    let second = service.index();

    assert!(Arc::ptr_eq(&first, &second), "unchanged tree should hit the cache");
}

#[test]
fn test_service_rebuilds_after_content_mutation() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello")
        .build();
    let service = ContentService::new(content.path(), Duration::from_secs(3600));

    let before = service.index();
    assert_eq!(before.posts[0].title, "Hello");

    let md_path = content.path().join("2026/February/10/hello/post.md");
    std::fs::write(&md_path, "# Hello Edited").unwrap();
    touch_future(&md_path, Duration::from_secs(60));

    let after = service.index();
    assert_eq!(after.posts[0].title, "Hello Edited");
}

#[test]
fn test_service_rebuilds_after_asset_mutation() {
    // An asset change invalidates the index cache even though the index does
    // not store asset metadata
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello")
        .with_file("2026/February/10/hello/photo.png", &[0u8; 16])
        .build();
    let service = ContentService::new(content.path(), Duration::from_secs(3600));

    let before = service.index();
    touch_future(&content.path().join("2026/February/10/hello/photo.png"), Duration::from_secs(60));
    let after = service.index();

    assert!(!Arc::ptr_eq(&before, &after), "asset touch should invalidate the cache");
    assert_eq!(before, after, "index content itself is unchanged");
}

#[test]
fn test_lookup_and_index_agree_on_identity() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "hello", "# Hello")
        .build();

    let index = build_index(content.path());
    let id = &index.posts[0].id;

    let post = load_post(content.path(), id).expect("indexed id should be loadable");
    assert_eq!(&post.id, id);
    assert_eq!(post.title, index.posts[0].title);
    assert_eq!(post.date_path, index.posts[0].date_path);
}

#[test]
fn test_malformed_entries_excluded_from_index_and_lookup() {
    let content = ContentTreeBuilder::new()
        .with_post("2026", "February", "10", "good", "# Good")
        .with_empty_entry("2026", "February", "10", "no-markdown")
        .with_post("2026", "February", "10", "ambiguous", "# One")
        .with_file("2026/February/10/ambiguous/two.md", b"# Two")
        .build();

    let index = build_index(content.path());
    assert_eq!(index.posts.len(), 1);
    assert_eq!(index.posts[0].id, "2026/February/10/good");

    assert!(load_post(content.path(), "2026/February/10/no-markdown").is_none());
    assert!(load_post(content.path(), "2026/February/10/ambiguous").is_none());
}
