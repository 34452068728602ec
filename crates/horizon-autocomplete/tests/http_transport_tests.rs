//! Remote lookups over real HTTP against a mock server.

#![cfg(feature = "networking")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use horizon_autocomplete::dom::{MemoryDocument, Document};
use horizon_autocomplete::geometry::Rect;
use horizon_autocomplete::net::HttpTransport;
use horizon_autocomplete::{Autocomplete, encode_query};
use horizon_autocomplete_net::http::HttpClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(base: String) -> (MemoryDocument, Autocomplete<MemoryDocument>) {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::new(0.0, 0.0, 280.0, 30.0));
    let ac = Autocomplete::builder(doc.clone(), input)
        .url(move |q| format!("{base}/cities?{}", encode_query([("q", q)])))
        .build()
        .unwrap();
    (doc, ac)
}

/// Poll until `done` holds or two seconds pass.
async fn poll_until<F>(ac: &mut Autocomplete<MemoryDocument>, mut done: F)
where
    F: FnMut(&Autocomplete<MemoryDocument>) -> bool,
{
    for _ in 0..100 {
        ac.poll();
        if done(ac) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_lookup_renders_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(query_param("q", "new york"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"title": "New York", "subtitle": "USA"}, {"title": "New York Mills"}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (doc, mut ac) = controller(server.uri());
    ac.mount();
    ac.set_value("new york");
    ac.lookup_now();

    poll_until(&mut ac, |ac| !ac.results().is_empty()).await;
    assert_eq!(ac.results().len(), 2);
    assert!(!ac.has_in_flight_request());

    let rows = doc.find_by_class(ac.rows_container().unwrap(), "ac-row");
    assert_eq!(rows.len(), 2);
    assert_eq!(doc.text_content(doc.find_by_class(rows[0], "ac-match")[0]), "New York");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_keeps_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(query_param("q", "ber"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"title": "Berlin"}]"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(query_param("q", "bern"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (_doc, mut ac) = controller(server.uri());
    let failures = Arc::new(AtomicUsize::new(0));
    let f = failures.clone();
    ac.lookup_failed.connect(move |_| {
        f.fetch_add(1, Ordering::SeqCst);
    });

    ac.mount();
    ac.set_value("ber");
    ac.lookup_now();
    poll_until(&mut ac, |ac| !ac.results().is_empty()).await;
    assert_eq!(ac.results().len(), 1);

    ac.set_value("bern");
    ac.lookup_now();
    poll_until(&mut ac, |_| failures.load(Ordering::SeqCst) > 0).await;
    assert_eq!(failures.load(Ordering::SeqCst), 1);
    assert_eq!(ac.results()[0].text("title").as_deref(), Some("Berlin"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unmount_cancels_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"title": "Oslo"}]"#)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let (doc, mut ac) = controller(server.uri());
    let input = ac.input();
    ac.handle_event(&doc.focus(input));
    ac.set_value("os");
    ac.lookup_now();
    assert!(ac.has_in_flight_request());

    ac.unmount();
    assert!(!ac.has_in_flight_request());

    tokio::time::sleep(Duration::from_millis(700)).await;
    ac.poll();
    assert!(ac.results().is_empty());
    assert_eq!(doc.value(input), "os");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_configured_client_sends_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(wiremock::matchers::header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"title": "Rome"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .default_header("x-api-key", "secret")
        .unwrap()
        .build()
        .unwrap();
    let base = server.uri();

    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let mut ac = Autocomplete::builder(doc, input)
        .remote(
            move |q| format!("{base}/cities?{}", encode_query([("q", q)])),
            HttpTransport::with_client(client),
        )
        .build()
        .unwrap();

    ac.set_value("ro");
    ac.lookup_now();
    poll_until(&mut ac, |ac| !ac.results().is_empty()).await;
    assert_eq!(ac.results()[0].text("title").as_deref(), Some("Rome"));
}
