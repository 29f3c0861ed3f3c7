mod common;

use std::time::{Duration, Instant};

use common::{BASE_URL, Harness, RecordingClipboard, RecordingSurface, created_body, link_json, list_body};
use shortlink_client::api::HttpMethod;
use shortlink_client::controller::{
    COPIED_LABEL, COPY_LABEL, PagePhase, SUBMIT_LABEL, SUBMITTING_LABEL, UiEvent,
};
use shortlink_client::errors::{ClientError, DETAIL_FAILURE_MESSAGE};
use shortlink_client::storage::TokenStore;
use shortlink_client::view::LinkListView;

fn submit(url: &str, alias: &str) -> UiEvent {
    UiEvent::Submit {
        url: url.to_string(),
        alias: alias.to_string(),
        expires_in: None,
    }
}

fn detail_body(code: &str, total: u64, analytics: &str) -> String {
    format!(
        r#"{{"data": {{"link": {}, "analytics": {{"total_clicks": {}, {}}}}}}}"#,
        link_json(code, total),
        total,
        analytics
    )
}

// =============================================================================
// Page load
// =============================================================================

#[tokio::test]
async fn test_load_without_token_requests_nothing() {
    let h = Harness::new(None);
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller.dispatch(UiEvent::Loaded, &mut surface).await;

    assert!(h.transport.requests().is_empty());
    assert!(controller.page().links.is_none());
    assert!(surface.frames.is_empty());
}

#[tokio::test]
async fn test_load_with_token_renders_rows_in_server_order() {
    let h = Harness::new(Some("tok"));
    h.transport.respond(200, &list_body(&["newest", "older"]));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller.dispatch(UiEvent::Loaded, &mut surface).await;

    let links = controller.page().links.as_ref().unwrap();
    let codes: Vec<&str> = links.rows().iter().map(|r| r.short_code.as_str()).collect();
    assert_eq!(codes, vec!["newest", "older"]);
    assert_eq!(links.rows()[0].clicks, "1 clicks");
    assert_eq!(controller.page().link_total, Some(2));
    assert_eq!(surface.frames.len(), 1);
}

#[tokio::test]
async fn test_empty_list_shows_empty_state() {
    let h = Harness::new(Some("tok"));
    h.transport.respond(200, r#"{"data": {"links": []}}"#);
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller.dispatch(UiEvent::Loaded, &mut surface).await;
    assert_eq!(controller.page().links, Some(LinkListView::Empty));
}

#[tokio::test]
async fn test_list_failure_is_silent() {
    let h = Harness::new(Some("tok"));
    h.transport.respond(500, "boom");
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller.dispatch(UiEvent::Loaded, &mut surface).await;

    assert!(controller.page().links.is_none());
    assert!(controller.page().error.is_none());
    assert!(surface.frames.is_empty());
}

// =============================================================================
// Submit
// =============================================================================

#[tokio::test]
async fn test_submit_shows_submitting_frame_then_result() {
    let h = Harness::new(None);
    h.transport.respond(201, &created_body("https://s.example/x", None));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;

    let first = &surface.frames[0];
    assert_eq!(first.phase, PagePhase::Submitting);
    assert!(!first.submit_enabled());
    assert_eq!(first.submit_label(), SUBMITTING_LABEL);
    assert!(first.result.is_none());
    assert!(first.error.is_none());

    let page = controller.page();
    assert_eq!(page.phase, PagePhase::ResultShown);
    assert!(page.submit_enabled());
    assert_eq!(page.submit_label(), SUBMIT_LABEL);
    assert_eq!(page.result.as_ref().unwrap().short_url, "https://s.example/x");
    assert!(page.analytics.is_none());
}

#[tokio::test]
async fn test_submit_failure_restores_control_and_hides_result() {
    let h = Harness::new(Some("tok"));
    h.transport
        .respond(201, &created_body("https://s.example/first", None))
        .respond(200, &list_body(&["first"]))
        .respond(409, r#"{"message": "Alias already taken"}"#);
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", "first"), &mut surface)
        .await;
    assert!(controller.page().result.is_some());

    controller
        .form_mut()
        .url
        .push_str("https://example.com/again");
    controller
        .dispatch(submit("https://example.com/again", "first"), &mut surface)
        .await;

    let page = controller.page();
    assert_eq!(page.phase, PagePhase::ErrorShown);
    assert_eq!(page.error.as_deref(), Some("Alias already taken"));
    assert!(page.result.is_none());
    assert!(page.submit_enabled());
    // inputs survive a failed create
    assert_eq!(page.form.url, "https://example.com/again");
    // no list refresh after the failure
    assert_eq!(h.transport.requests().len(), 3);
}

#[tokio::test]
async fn test_submit_failure_without_message_uses_fallback() {
    let h = Harness::new(None);
    h.transport.respond(502, "<html>bad gateway</html>");
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;
    assert_eq!(controller.page().error.as_deref(), Some("Failed to shorten URL"));
}

#[tokio::test]
async fn test_submit_network_failure_restores_control() {
    let h = Harness::new(None);
    h.transport.fail(ClientError::network("connection refused"));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;

    let page = controller.page();
    assert!(page.submit_enabled());
    assert_eq!(page.error.as_deref(), Some("connection refused"));
}

#[tokio::test]
async fn test_returned_token_is_saved_before_list_refresh() {
    let h = Harness::new(None);
    h.transport
        .respond(201, &created_body("https://s.example/x", Some("guest-abc")))
        .respond(200, &list_body(&["x"]));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;

    assert_eq!(h.tokens.get().as_deref(), Some("guest-abc"));

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].bearer, None);
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(
        requests[1].url,
        format!("{}/me/links?page=1&per_page=10", BASE_URL)
    );
    assert_eq!(requests[1].bearer.as_deref(), Some("guest-abc"));
    assert_eq!(
        h.transport.observed_tokens(),
        vec![None, Some("guest-abc".to_string())]
    );
    assert_eq!(controller.page().links.as_ref().unwrap().rows().len(), 1);
}

#[tokio::test]
async fn test_submit_success_clears_form() {
    let h = Harness::new(None);
    h.transport.respond(201, &created_body("https://s.example/x", None));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller.form_mut().url.push_str("https://example.com");
    controller.form_mut().alias.push_str("mine");
    controller
        .dispatch(submit("https://example.com", "mine"), &mut surface)
        .await;

    assert!(controller.page().form.url.is_empty());
    assert!(controller.page().form.alias.is_empty());
}

#[tokio::test]
async fn test_submit_trims_inputs() {
    let h = Harness::new(None);
    h.transport.respond(201, &created_body("https://s.example/x", None));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("  https://example.com  ", "   "), &mut surface)
        .await;

    let body: serde_json::Value =
        serde_json::from_str(h.transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"url": "https://example.com"}));
}

// =============================================================================
// Row / anchor activation
// =============================================================================

#[tokio::test]
async fn test_row_activation_fetches_detail_once() {
    let h = Harness::new(Some("tok"));
    h.transport.respond(
        200,
        &detail_body(
            "abc123",
            10,
            r#""countries": {"US": 3, "DE": 7}, "referers": {"": 4, "news.example": 6}"#,
        ),
    );
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(
            UiEvent::RowActivated {
                short_code: "abc123".to_string(),
            },
            &mut surface,
        )
        .await;

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{}/me/links/abc123", BASE_URL));

    let page = controller.page();
    assert_eq!(page.result.as_ref().unwrap().short_url, "https://s.example/abc123");
    assert_eq!(page.selected.as_deref(), Some("abc123"));

    let analytics = page.analytics.as_ref().unwrap();
    assert_eq!(analytics.total_clicks, 10);
    assert_eq!(analytics.sections[0].title, "Countries");
    assert_eq!(analytics.sections[0].entries[0].label, "DE");
    let referers = &analytics.sections[1];
    assert_eq!(referers.title, "Referers");
    assert_eq!(referers.entries[0].label, "news.example");
    assert_eq!(referers.entries[1].label, "Direct");
}

#[tokio::test]
async fn test_row_activation_without_token_leaves_page_untouched() {
    let h = Harness::new(None);
    h.transport.respond(201, &created_body("https://s.example/x", None));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;
    let before = controller.page().clone();
    let frames = surface.frames.len();

    controller
        .dispatch(
            UiEvent::RowActivated {
                short_code: "abc123".to_string(),
            },
            &mut surface,
        )
        .await;

    assert_eq!(h.transport.requests().len(), 1);
    assert_eq!(surface.frames.len(), frames);
    let page = controller.page();
    assert_eq!(page.result, before.result);
    assert_eq!(page.error, before.error);
    assert_eq!(page.selected, before.selected);
    assert_eq!(page.links, before.links);
}

#[tokio::test]
async fn test_anchor_activation_navigates_without_detail_fetch() {
    let h = Harness::new(Some("tok"));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(
            UiEvent::AnchorActivated {
                short_url: "https://s.example/abc123".to_string(),
            },
            &mut surface,
        )
        .await;

    assert!(h.transport.requests().is_empty());
    assert_eq!(surface.opened, vec!["https://s.example/abc123".to_string()]);
    assert_eq!(
        controller.page().last_opened.as_deref(),
        Some("https://s.example/abc123")
    );
    assert!(controller.page().result.is_none());
}

#[tokio::test]
async fn test_detail_failure_shows_fixed_message() {
    let h = Harness::new(Some("tok"));
    h.transport
        .respond(404, r#"{"message": "Link not found"}"#);
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(
            UiEvent::RowActivated {
                short_code: "gone".to_string(),
            },
            &mut surface,
        )
        .await;

    let page = controller.page();
    assert_eq!(page.error.as_deref(), Some(DETAIL_FAILURE_MESSAGE));
    assert!(page.result.is_none());
    assert!(page.analytics.is_none());
}

#[tokio::test]
async fn test_analytics_hidden_when_no_clicks() {
    let h = Harness::new(Some("tok"));
    h.transport
        .respond(200, &detail_body("quiet", 0, r#""countries": {}"#));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(
            UiEvent::RowActivated {
                short_code: "quiet".to_string(),
            },
            &mut surface,
        )
        .await;

    assert!(controller.page().result.is_some());
    assert!(controller.page().analytics.is_none());
}

#[tokio::test]
async fn test_later_detail_replaces_earlier() {
    let h = Harness::new(Some("tok"));
    h.transport
        .respond(200, &detail_body("one", 1, r#""countries": {"US": 1}"#))
        .respond(200, &detail_body("two", 2, r#""countries": {"FR": 2}"#));
    let mut controller = h.controller(RecordingClipboard::default());
    let mut surface = RecordingSurface::default();

    for code in ["one", "two"] {
        controller
            .dispatch(
                UiEvent::RowActivated {
                    short_code: code.to_string(),
                },
                &mut surface,
            )
            .await;
    }

    let page = controller.page();
    assert_eq!(page.selected.as_deref(), Some("two"));
    assert_eq!(page.analytics.as_ref().unwrap().total_clicks, 2);
}

// =============================================================================
// Copy feedback
// =============================================================================

#[tokio::test]
async fn test_copy_feedback_reverts_after_duration() {
    let h = Harness::new(None);
    h.transport.respond(201, &created_body("https://s.example/x", None));
    let clipboard = RecordingClipboard::default();
    let mut controller = h.controller(clipboard.clone());
    let mut surface = RecordingSurface::default();

    controller
        .dispatch(submit("https://example.com", ""), &mut surface)
        .await;

    let now = Instant::now();
    controller.copy_result(now, &mut surface);
    assert_eq!(clipboard.copied.lock().as_slice(), ["https://s.example/x"]);
    assert_eq!(controller.page().copy.label(), COPIED_LABEL);

    let frames = surface.frames.len();
    controller.tick(now + Duration::from_millis(1999), &mut surface);
    assert_eq!(controller.page().copy.label(), COPIED_LABEL);
    assert_eq!(surface.frames.len(), frames);

    controller.tick(now + Duration::from_millis(2000), &mut surface);
    assert_eq!(controller.page().copy.label(), COPY_LABEL);
    assert_eq!(surface.frames.len(), frames + 1);
}

#[tokio::test]
async fn test_copy_without_result_does_nothing() {
    let h = Harness::new(None);
    let clipboard = RecordingClipboard::default();
    let mut controller = h.controller(clipboard.clone());
    let mut surface = RecordingSurface::default();

    controller.dispatch(UiEvent::CopyRequested, &mut surface).await;

    assert!(clipboard.copied.lock().is_empty());
    assert_eq!(controller.page().copy.label(), COPY_LABEL);
}
