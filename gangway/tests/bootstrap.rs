//! Bootstrap integration tests.
//!
//! End-to-end: page attribute and cookie header in, initialized
//! application plus wired well-known channels out.

mod common;

use common::{SharedPage, TestApp};
use gangway::testing::RecordingReporter;
use gangway::{
    AppInputs, BootConfig, BootError, ChannelOp, Diagnostic, MemoryPorts, NavigationErrorReport,
    PortEvent, StaticPage, Viewport, boot, channels,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

fn empty_app(_inputs: AppInputs) -> Result<TestApp, gangway::BoxError> {
    Ok(TestApp {
        ports: Arc::new(MemoryPorts::builder().build()),
    })
}

#[test]
fn initializes_application_with_page_data_and_token() {
    let host = Arc::new(StaticPage {
        page_attribute: Some(r#"{"props":{"a":1}}"#.to_owned()),
        cookie_header: "XSRF-TOKEN=abc%20def; other=1".to_owned(),
        viewport: Viewport {
            width: 1280,
            height: 720,
        },
    });
    let seen = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);

    boot(
        host,
        BootConfig::default(),
        Arc::new(RecordingReporter::default()),
        move |inputs| {
            *captured.lock().unwrap() = Some(inputs.clone());
            empty_app(inputs)
        },
    )
    .unwrap();

    let inputs = seen.lock().unwrap().clone().unwrap();
    assert_eq!(inputs.page, json!({"props": {"a": 1}}));
    assert_eq!(inputs.token, "abc def");
    assert_eq!(inputs.mount, "app");
    assert_eq!(
        inputs.viewport,
        Viewport {
            width: 1280,
            height: 720
        }
    );
}

#[test]
fn degraded_inputs_do_not_prevent_initialization() {
    let host = Arc::new(StaticPage {
        page_attribute: Some("{definitely not json".to_owned()),
        cookie_header: "theme=dark".to_owned(),
        viewport: Viewport::default(),
    });
    let seen = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);

    boot(
        host,
        BootConfig::default(),
        Arc::new(RecordingReporter::default()),
        move |inputs| {
            *captured.lock().unwrap() = Some(inputs.clone());
            empty_app(inputs)
        },
    )
    .unwrap();

    let inputs = seen.lock().unwrap().clone().unwrap();
    assert_eq!(inputs.page, json!({}));
    assert_eq!(inputs.token, "");
}

#[test]
fn missing_wellknown_channels_degrade_to_diagnostics() {
    let host = Arc::new(StaticPage::default());
    let reporter = RecordingReporter::default();

    boot(
        host,
        BootConfig::default(),
        Arc::new(reporter.clone()),
        empty_app,
    )
    .unwrap();

    // One subscribe diagnostic per well-known channel the app left out.
    let expected: Vec<_> = [
        channels::TOKEN_REFRESH_REQUEST,
        channels::DECODE_ERROR_REPORT,
        channels::NAVIGATION_ERROR_REPORT,
    ]
    .into_iter()
    .map(|name| Diagnostic::missing(name, ChannelOp::Subscribe))
    .collect();
    assert_eq!(reporter.events(), expected);
}

#[tokio::test]
async fn token_refresh_request_reextracts_and_sends() {
    let cookie = Arc::new(Mutex::new("XSRF-TOKEN=first".to_owned()));
    let host = Arc::new(SharedPage {
        page_attribute: None,
        cookie_header: Arc::clone(&cookie),
        viewport: Viewport::default(),
    });
    let table = Arc::new(
        MemoryPorts::builder()
            .inbound(channels::TOKEN_REFRESH_REQUEST)
            .outbound(channels::TOKEN_REFRESHED)
            .build(),
    );
    let app_table = Arc::clone(&table);

    boot(
        host,
        BootConfig::default(),
        Arc::new(RecordingReporter::default()),
        move |_inputs| Ok(TestApp { ports: app_table }),
    )
    .unwrap();

    // The cookie jar changes after startup; refresh must see the new value.
    *cookie.lock().unwrap() = "XSRF-TOKEN=second%20half".to_owned();

    table
        .inbound_channel(channels::TOKEN_REFRESH_REQUEST)
        .unwrap()
        .emit(&PortEvent::Empty)
        .await
        .unwrap();

    assert_eq!(
        table
            .outbound_channel(channels::TOKEN_REFRESHED)
            .unwrap()
            .drain(),
        vec![PortEvent::Text("second half".to_owned())]
    );
}

#[tokio::test]
async fn decode_error_report_is_forwarded_to_reporter() {
    let host = Arc::new(StaticPage::default());
    let reporter = RecordingReporter::default();
    let table = Arc::new(
        MemoryPorts::builder()
            .inbound(channels::DECODE_ERROR_REPORT)
            .build(),
    );
    let app_table = Arc::clone(&table);

    boot(
        host,
        BootConfig::default(),
        Arc::new(reporter.clone()),
        move |_inputs| Ok(TestApp { ports: app_table }),
    )
    .unwrap();
    reporter.clear();

    table
        .inbound_channel(channels::DECODE_ERROR_REPORT)
        .unwrap()
        .emit(&PortEvent::Json(json!({
            "source": "login",
            "error": "missing field `user`",
        })))
        .await
        .unwrap();

    assert_eq!(
        reporter.events(),
        vec![Diagnostic::failed(
            channels::DECODE_ERROR_REPORT,
            ChannelOp::Subscribe,
            "LOGIN: missing field `user`",
        )]
    );
}

#[tokio::test]
async fn navigation_error_is_reported_and_reemitted() {
    let host = Arc::new(StaticPage::default());
    let reporter = RecordingReporter::default();
    let table = Arc::new(
        MemoryPorts::builder()
            .inbound(channels::NAVIGATION_ERROR_REPORT)
            .outbound(channels::NAVIGATION_ERROR)
            .build(),
    );
    let app_table = Arc::clone(&table);

    boot(
        host,
        BootConfig::default(),
        Arc::new(reporter.clone()),
        move |_inputs| Ok(TestApp { ports: app_table }),
    )
    .unwrap();
    reporter.clear();

    let report = NavigationErrorReport {
        url: "https://example.test/deck".to_owned(),
        error: "timeout".to_owned(),
    };
    let event = report.to_event();
    table
        .inbound_channel(channels::NAVIGATION_ERROR_REPORT)
        .unwrap()
        .emit(&event)
        .await
        .unwrap();

    assert_eq!(
        reporter.events(),
        vec![Diagnostic::failed(
            channels::NAVIGATION_ERROR_REPORT,
            ChannelOp::Subscribe,
            "https://example.test/deck: timeout",
        )]
    );
    assert_eq!(
        table
            .outbound_channel(channels::NAVIGATION_ERROR)
            .unwrap()
            .drain(),
        vec![event]
    );
}

#[test]
fn factory_failure_is_the_only_fatal_path() {
    let host = Arc::new(StaticPage::default());

    let result = boot(
        host,
        BootConfig::default(),
        Arc::new(RecordingReporter::default()),
        |_inputs| Err::<TestApp, gangway::BoxError>("no mount node".into()),
    );

    assert!(matches!(result, Err(BootError::Application(_))));
}
