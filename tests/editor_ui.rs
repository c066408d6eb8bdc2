mod common;

use common::{FakePage, Node};
use serde_json::json;
use web_time::{Duration, Instant};
use wp_ai_editor_web::config::UiConfig;
use wp_ai_editor_web::notification::Severity;
use wp_ai_editor_web::ui::EditorUi;
use wp_ai_editor_web::validation::is_http_url;

fn page_ui() -> EditorUi<FakePage> {
    EditorUi::new(UiConfig::default(), FakePage::default())
}

#[test]
fn every_severity_gets_its_style_and_unknown_falls_back_to_info() {
    let mut ui = page_ui();
    let now = Instant::now();
    for name in ["info", "success", "warning", "error", "fatal"] {
        ui.notify(name, Severity::from_name(name), None, now);
    }

    let styles: Vec<(String, String)> = ui
        .surface()
        .toasts()
        .into_iter()
        .map(|node| match node {
            Node::Toast { class, icon, .. } => (class.clone(), icon.clone()),
            other => panic!("unexpected node {other:?}"),
        })
        .collect();

    assert_eq!(
        styles,
        [
            ("bg-info", "fas fa-info-circle"),
            ("bg-success", "fas fa-check-circle"),
            ("bg-warning", "fas fa-exclamation-triangle"),
            ("bg-danger", "fas fa-exclamation-triangle"),
            ("bg-info", "fas fa-info-circle"),
        ]
        .map(|(c, i)| (c.to_string(), i.to_string()))
    );
}

#[test]
fn toast_appears_once_and_goes_away_after_its_duration() {
    let mut ui = page_ui();
    let start = Instant::now();
    let handle = ui.notify(
        "Image uploaded",
        Severity::Success,
        Some(Duration::from_millis(1200)),
        start,
    );

    assert_eq!(ui.surface().toast_texts(), ["Image uploaded"]);

    ui.expire(start + Duration::from_millis(600));
    assert_eq!(ui.surface().toasts().len(), 1);

    ui.expire(start + Duration::from_millis(1200));
    assert!(ui.surface().toasts().is_empty());
    assert!(ui.notifications().get(handle.id()).is_none());
}

#[test]
fn toasts_share_one_container_and_stack_without_a_cap() {
    let mut ui = page_ui();
    let now = Instant::now();
    for i in 0..25 {
        ui.notify(format!("message {i}"), Severity::Info, None, now);
    }
    assert_eq!(ui.surface().count(|n| *n == Node::ToastContainer), 1);
    assert_eq!(ui.surface().toasts().len(), 25);
    assert_eq!(ui.surface().toast_texts()[24], "message 24");
}

#[test]
fn closing_a_toast_early_keeps_the_others() {
    let mut ui = page_ui();
    let now = Instant::now();
    let first = ui.notify("Draft saved", Severity::Success, None, now);
    ui.notify(
        "Publishing...",
        Severity::Info,
        None,
        now + Duration::from_secs(1),
    );

    assert!(ui.dismiss(first.id()));
    assert_eq!(ui.surface().toast_texts(), ["Publishing..."]);
    // The first toast's timer firing later finds nothing to remove.
    assert_eq!(ui.expire(first.expires_at()), 0);
    assert_eq!(ui.surface().toast_texts(), ["Publishing..."]);
}

#[test]
fn selecting_twice_leaves_only_the_latest_marked() {
    let mut ui = page_ui();
    ui.select("img-a", json!({ "url": "https://images.example/a.jpg" }));
    ui.select("img-b", json!({ "url": "https://images.example/b.jpg", "alt": "Harbor" }));

    assert_eq!(ui.surface().marked, ["img-b"]);
    assert_eq!(ui.surface().count(|n| matches!(n, Node::Checkmark(_))), 1);
    assert_eq!(ui.surface().count(|n| *n == Node::Checkmark("img-b")), 1);

    let record = ui.selection().unwrap();
    assert_eq!(record.image, "img-b");
    assert_eq!(
        record.metadata,
        json!({ "url": "https://images.example/b.jpg", "alt": "Harbor" })
    );
}

#[test]
fn overlay_show_then_hide_leaves_no_overlay() {
    let mut ui = page_ui();
    ui.show_overlay(Some("Saving..."));
    assert_eq!(ui.surface().count(|n| matches!(n, Node::Overlay(_))), 1);

    ui.hide_overlay();
    assert_eq!(ui.surface().count(|n| matches!(n, Node::Overlay(_))), 0);
    assert!(!ui.overlay().is_visible());
}

#[test]
fn second_overlay_replaces_the_first() {
    let mut ui = page_ui();
    ui.show_overlay(None);
    ui.show_overlay(Some("Generating content..."));
    let overlays: Vec<_> = ui
        .surface()
        .nodes
        .iter()
        .filter(|n| matches!(n, Node::Overlay(_)))
        .collect();
    assert_eq!(overlays, [&Node::Overlay("Generating content...".to_string())]);
}

#[test]
fn api_errors_become_error_toasts() {
    let mut ui = page_ui();
    let now = Instant::now();

    let report = ui.report_error(&json!({ "response": { "status": 500 } }), Some("fallback"), now);
    assert!(report.message.contains("500"));

    let report = ui.report_error(&json!({}), Some("fallback"), now);
    assert_eq!(report.message, "fallback");

    assert_eq!(ui.surface().toast_texts(), ["Server error: 500", "fallback"]);
}

#[test]
fn auto_save_fires_once_after_the_edits_settle() {
    use std::cell::Cell;
    use std::rc::Rc;

    let config = UiConfig {
        auto_save_delay_ms: 2000,
        ..UiConfig::default()
    };
    let mut ui = EditorUi::new(config, FakePage::default());
    let saves = Rc::new(Cell::new(0));
    let counter = saves.clone();
    ui.set_auto_save_callback(move || counter.set(counter.get() + 1));

    let start = Instant::now();
    ui.content_changed(start);
    let deadline = ui.content_changed(start + Duration::from_millis(1500));
    assert_eq!(deadline, start + Duration::from_millis(3500));

    assert!(!ui.poll_auto_save(start + Duration::from_millis(2000)));
    assert!(ui.poll_auto_save(deadline));
    assert_eq!(saves.get(), 1);
}

#[test]
fn url_check_only_accepts_web_urls() {
    assert!(is_http_url("https://example.com"));
    assert!(!is_http_url("not a url"));
    assert!(!is_http_url("ftp://example.com"));
}
