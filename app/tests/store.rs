#![cfg(feature = "ssr")]

use std::fs;
use std::path::Path;

use app::store::Store;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn setup() -> tempfile::TempDir {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let blog = dir.path().join("blog");
    fs::create_dir_all(blog.join("0003_nested_post")).unwrap();
    fs::create_dir_all(blog.join("0006_assets")).unwrap();
    fs::create_dir_all(blog.join("0007_empty")).unwrap();
    write(&blog.join("0006_assets/cover.txt"), "not a post\n");
    write(
        &blog.join("0001_getting_started_with_golang.md"),
        "---\ntitle: Getting Started with Golang\nsummary: A beginner's guide\ndate: 2023-05-01\ntags: [golang, tutorial]\n---\n\n# Hello\n\nWorld\n",
    );
    write(
        &blog.join("0002_nextjs_and_chakra_ui.md"),
        "---\ntitle: Next.js and Chakra UI\ndate: 2023-05-15\ntags: [nextjs]\n---\nBody\n",
    );
    write(
        &blog.join("0003_nested_post/post.md"),
        "---\ntitle: Nested\ndate: 2023-05-15\n---\nNested body\n",
    );
    write(&blog.join("0004_draft.md"), "---\ntitle: Coming soon\n---\nTBD\n");
    write(&blog.join("README.md"), "not a post\n");
    write(&blog.join("0005_notes.txt"), "not a post either\n");
    write(
        &dir.path().join("profile.json"),
        r#"{"name": "Vincent", "title": "Developer", "description": "Hi", "skills": ["Rust"], "headlines": ["Vincent", "Creator"]}"#,
    );
    write(
        &dir.path().join("badges.json"),
        r#"[{"id": "1", "name": "Hacktoberfest", "issuer": "DigitalOcean", "issueDate": "2022-10-31T00:00:00Z"}]"#,
    );
    write(&dir.path().join("certificates.json"), "[{");
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn posts_are_sorted_most_recent_first_with_drafts_last() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), false);

    let ids: Vec<String> = store.posts().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        [
            "0002-nextjs-and-chakra-ui",
            "0003-nested-post",
            "0001-getting-started-with-golang",
            "0004-draft",
        ]
    );
}

#[test]
fn directories_without_a_post_are_skipped() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), false);

    let posts = store.posts().unwrap();
    assert_eq!(posts.len(), 4);
    assert!(posts.iter().all(|post| post.id != "0006-assets" && post.id != "0007-empty"));
    assert!(store.post("0006-assets").unwrap_err().is_not_found());
    assert_eq!(store.post("0003-nested-post").unwrap().content, "Nested body");
}

#[test]
fn drafts_are_hidden_in_production() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), true);

    let posts = store.posts().unwrap();
    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|post| !post.is_draft()));
    assert!(store.post("0004-draft").unwrap_err().is_not_found());
}

#[test]
fn post_reads_front_matter_and_body() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), false);

    let post = store.post("0001-getting-started-with-golang").unwrap();
    assert_eq!(post.title, "Getting Started with Golang");
    assert_eq!(post.summary, "A beginner's guide");
    assert_eq!(post.publish_date, NaiveDate::from_ymd_opt(2023, 5, 1));
    assert_eq!(post.tags, ["golang", "tutorial"]);
    assert_eq!(post.content, "# Hello\n\nWorld");
    assert_eq!(
        app::markdown::render(&post.content),
        "<h1>Hello</h1>\n\n<p>World</p>"
    );
}

#[test]
fn json_documents() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), false);

    let profile = store.profile().unwrap();
    assert_eq!(profile.headlines, ["Vincent", "Creator"]);
    assert!(profile.contact.email.is_empty());

    let badges = store.badges().unwrap();
    assert_eq!(badges[0].issue_date, NaiveDate::from_ymd_opt(2022, 10, 31).unwrap());

    let error = store.certificates().unwrap_err();
    assert!(!error.is_not_found());
    assert!(error.to_string().contains("certificates.json"));
}

#[test]
fn missing_files_are_not_found() {
    let dir = setup();
    let store = Store::new(dir.path().to_path_buf(), false);

    assert!(store.cv().unwrap_err().is_not_found());
    assert!(store.cv_pdf().unwrap_err().is_not_found());

    write(&dir.path().join("cv.pdf"), "%PDF-1.4");
    assert_eq!(store.cv_pdf().unwrap(), b"%PDF-1.4");
}

#[test]
fn bundled_content_loads() {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = Store::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../content"), true);

    let posts = store.posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "0002-nextjs-and-chakra-ui");
    assert_eq!(posts[0].title, "Next.js and Chakra UI: A Perfect Combination");

    let golang = store.post("0001-getting-started-with-golang").unwrap();
    assert_eq!(golang.content, app::fallback::post("1").content);

    let cv = store.cv().unwrap();
    assert_eq!(cv.experience[0].year, "02/2021-Present");
    assert_eq!(cv.education[0].year, "2022");
    assert_eq!(store.profile().unwrap().headlines.len(), 4);
    assert_eq!(store.certificates().unwrap().len(), 2);
    assert_eq!(store.badges().unwrap(), app::fallback::badges());
}
