//! Bootstrap orchestration.
//!
//! A single initialization pass per page view: read the initial page
//! data, extract the token, hand both (plus viewport metadata) to the
//! rendering application factory, wrap the application's port table in
//! the dispatch safety layer, and wire the well-known channels.
//!
//! Each step tolerates failure of the previous one. Page data degrades
//! to an empty object, the token degrades to the empty string, and a
//! missing well-known channel degrades to a diagnostic; only the
//! application factory itself can abort the boot.

use crate::event::{DecodeErrorReport, NavigationErrorReport, PortEvent};
use crate::host::{HostPage, Viewport};
use gangway_core::{BootError, BoxError, ChannelOp, Diagnostic, PortTable, Reporter};
use gangway_std::{cookie, page, ports::SafePorts};
use serde_json::Value;
use std::sync::Arc;

/// Well-known channel names wired by the bootstrap.
///
/// The names follow the server framework contract; applications register
/// whichever subset they care about and the safety layer degrades the
/// rest.
pub mod channels {
    /// Inbound: the application asks for a fresh token. No payload.
    pub const TOKEN_REFRESH_REQUEST: &str = "token-refresh-request";
    /// Outbound companion: the re-extracted token as a string payload.
    pub const TOKEN_REFRESHED: &str = "token-refreshed";
    /// Inbound: the application reports a JSON decode failure.
    pub const DECODE_ERROR_REPORT: &str = "decode-error-report";
    /// Inbound: the application reports a navigation failure.
    pub const NAVIGATION_ERROR_REPORT: &str = "navigation-error-report";
    /// Outbound companion: the navigation failure re-emitted so the
    /// application can react.
    pub const NAVIGATION_ERROR: &str = "navigation-error";
}

/// The cookie key the token is extracted from by default.
pub const DEFAULT_TOKEN_COOKIE: &str = "XSRF-TOKEN";

/// Bootstrap configuration.
#[derive(Debug, Clone)]
pub struct BootConfig {
    /// The cookie key carrying the token.
    pub token_cookie: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            token_cookie: DEFAULT_TOKEN_COOKIE.to_owned(),
        }
    }
}

/// Inputs handed to the rendering application factory.
#[derive(Debug, Clone)]
pub struct AppInputs {
    /// Identifier of the node the application mounts into.
    pub mount: String,
    /// Initial page data; an empty object when the attribute was absent
    /// or malformed.
    pub page: Value,
    /// The extracted token; empty when no cookie matched.
    pub token: String,
    /// Viewport metadata.
    pub viewport: Viewport,
}

/// A rendering application instance, as seen by the bootstrap.
pub trait Application: Send + Sync + 'static {
    /// The raw channel registry this application exposes.
    fn ports(&self) -> Arc<dyn PortTable<PortEvent>>;
}

/// Context shared by the well-known channel handlers.
///
/// Created once per boot and passed by reference to every handler
/// registration; lifetime equals the page view. There is no global
/// state.
pub struct BootContext {
    host: Arc<dyn HostPage>,
    token_cookie: String,
    ports: SafePorts<PortEvent>,
    reporter: Arc<dyn Reporter>,
}

impl BootContext {
    /// Re-extract the token from the cookie jar as it is now.
    pub fn refresh_token(&self) -> String {
        cookie::token(&self.host.cookie_header(), &self.token_cookie)
    }

    /// The dispatch safety layer over the application's ports.
    pub fn ports(&self) -> &SafePorts<PortEvent> {
        &self.ports
    }
}

/// A booted page view.
///
/// Owns the application instance, the safety layer over its ports, and
/// the handler context, all for the lifetime of the page view.
pub struct Booted<A> {
    /// The rendering application instance.
    pub app: A,
    /// The dispatch safety layer over the application's ports.
    pub ports: SafePorts<PortEvent>,
    context: Arc<BootContext>,
}

impl<A> Booted<A> {
    /// The context shared by the well-known channel handlers.
    pub fn context(&self) -> &Arc<BootContext> {
        &self.context
    }
}

/// Run the bootstrap sequence.
///
/// Reads page data and token from `host`, initializes the application
/// through `factory`, wraps its ports, and wires the well-known
/// channels through `reporter`. The only fatal path is the factory
/// returning an error.
pub fn boot<A, F>(
    host: Arc<dyn HostPage>,
    config: BootConfig,
    reporter: Arc<dyn Reporter>,
    factory: F,
) -> Result<Booted<A>, BootError>
where
    A: Application,
    F: FnOnce(AppInputs) -> Result<A, BoxError>,
{
    let page = page::read(host.page_attribute().as_deref());
    let token = cookie::token(&host.cookie_header(), &config.token_cookie);

    let inputs = AppInputs {
        mount: host.mount_point(),
        page,
        token,
        viewport: host.viewport(),
    };
    tracing::debug!(
        mount = %inputs.mount,
        has_token = !inputs.token.is_empty(),
        "bootstrapping rendering application"
    );

    let app = factory(inputs).map_err(BootError::Application)?;
    let ports = SafePorts::wrap(app.ports(), Arc::clone(&reporter));

    let context = Arc::new(BootContext {
        host,
        token_cookie: config.token_cookie,
        ports: ports.clone(),
        reporter,
    });
    wire(&context);

    Ok(Booted {
        app,
        ports,
        context,
    })
}

/// Register the fixed handlers for the well-known channels.
fn wire(context: &Arc<BootContext>) {
    let ctx = Arc::clone(context);
    context
        .ports
        .port(channels::TOKEN_REFRESH_REQUEST)
        .subscribe(move |_event: PortEvent| {
            let ctx = Arc::clone(&ctx);
            async move {
                let token = ctx.refresh_token();
                ctx.ports
                    .port(channels::TOKEN_REFRESHED)
                    .send(PortEvent::Text(token));
                Ok(())
            }
        });

    let ctx = Arc::clone(context);
    context
        .ports
        .port(channels::DECODE_ERROR_REPORT)
        .subscribe(move |event: PortEvent| {
            let ctx = Arc::clone(&ctx);
            async move {
                let detail = match DecodeErrorReport::from_event(&event) {
                    Some(report) => format!("{}: {}", report.source.to_uppercase(), report.error),
                    None => format!("unrecognized decode report payload: {event:?}"),
                };
                ctx.reporter.report(&Diagnostic::failed(
                    channels::DECODE_ERROR_REPORT,
                    ChannelOp::Subscribe,
                    detail,
                ));
                Ok(())
            }
        });

    let ctx = Arc::clone(context);
    context
        .ports
        .port(channels::NAVIGATION_ERROR_REPORT)
        .subscribe(move |event: PortEvent| {
            let ctx = Arc::clone(&ctx);
            async move {
                let detail = match NavigationErrorReport::from_event(&event) {
                    Some(report) => format!("{}: {}", report.url, report.error),
                    None => format!("unrecognized navigation report payload: {event:?}"),
                };
                ctx.reporter.report(&Diagnostic::failed(
                    channels::NAVIGATION_ERROR_REPORT,
                    ChannelOp::Subscribe,
                    detail,
                ));
                // Re-emit so the application can react to its own report.
                ctx.ports.port(channels::NAVIGATION_ERROR).send(event);
                Ok(())
            }
        });
}
