//! HTTP server rendering each request on the fly.
//!
//! Built on `tiny_http`; requests are handled sequentially on the main
//! thread and every request takes a fresh config snapshot via [`cfg`].
//!
//! ```text
//! GET  /, /services, /about, /contact, /legal   ─► Session::open ─► render
//! GET  /sitemap.xml                             ─► render_sitemap
//! GET  /assets/**                               ─► [build] assets dir
//! POST /contact                                 ─► ContactForm ─► submit ─► render
//! *                                             ─► 404 page
//! ```
//!
//! Ctrl+C unblocks the accept loop for a graceful shutdown.

use crate::{
    config::{SiteConfig, cfg},
    form::{ContactForm, FormState, HttpSubmitter},
    generator::sitemap::render_sitemap,
    log,
    logger::status_label,
    router::Route,
    session::Session,
};
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use std::{
    fs,
    io::Read,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Upper bound on an accepted form body.
const MAX_FORM_BODY: u64 = 16 * 1024;

const ASSETS_PREFIX: &str = "/assets/";

/// Start the server and block until Ctrl+C.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface: {}", c.serve.interface))?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &cfg()) {
            log!("error"; "request failed: {e:#}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_err = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// A fully prepared response.
#[derive(Debug)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    fn html(status: u16, html: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: html.into_bytes(),
        }
    }

    fn text(status: u16, text: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: text.as_bytes().to_vec(),
        }
    }
}

fn handle_request(mut request: Request, config: &SiteConfig) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let reply = match method {
        Method::Post => read_body(&mut request).and_then(|body| resolve_post(&url, &body, config)),
        Method::Get | Method::Head => resolve_get(&url, config),
        _ => Ok(Reply::text(405, "Method Not Allowed")),
    };
    let reply = reply.unwrap_or_else(|e| {
        log!("error"; "{url}: {e:#}");
        Reply::text(500, "Internal Server Error")
    });

    log!("serve"; "{} {} {}", status_label(reply.status), method, url);
    respond(request, reply)
}

/// A posted form body as read off the wire.
#[derive(Debug)]
enum FormBody {
    Text(String),
    /// Longer than [`MAX_FORM_BODY`].
    TooLarge,
    NotUtf8,
}

impl FormBody {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.len() as u64 > MAX_FORM_BODY {
            return Self::TooLarge;
        }
        String::from_utf8(bytes).map_or(Self::NotUtf8, Self::Text)
    }
}

fn read_body(request: &mut Request) -> Result<FormBody> {
    if request.body_length().is_some_and(|len| len as u64 > MAX_FORM_BODY) {
        return Ok(FormBody::TooLarge);
    }
    let mut bytes = Vec::new();
    request
        .as_reader()
        .take(MAX_FORM_BODY + 1)
        .read_to_end(&mut bytes)
        .context("Failed to read request body")?;
    Ok(FormBody::from_bytes(bytes))
}

fn resolve_get(url: &str, config: &SiteConfig) -> Result<Reply> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    if path == format!("/{}", config.build.sitemap.path.display()) && config.build.sitemap.enable {
        return Ok(Reply {
            status: 200,
            content_type: "application/xml; charset=utf-8",
            body: render_sitemap(config, Local::now().date_naive()),
        });
    }

    if let Some(rel) = path.strip_prefix(ASSETS_PREFIX) {
        if let Some(file) = asset_path(&config.build.assets, rel).filter(|p| p.is_file()) {
            let body = fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            return Ok(Reply {
                status: 200,
                content_type: guess_content_type(&file),
                body,
            });
        }
        return render_route(Route::NotFound, config);
    }

    render_route(Route::from_path(path), config)
}

fn resolve_post(url: &str, body: &FormBody, config: &SiteConfig) -> Result<Reply> {
    if Route::from_path(url) != Route::Contact {
        return Ok(Reply::text(405, "Method Not Allowed"));
    }
    let body = match body {
        FormBody::Text(body) => body,
        FormBody::TooLarge => return Ok(Reply::text(413, "Payload Too Large")),
        FormBody::NotUtf8 => return Ok(Reply::text(400, "Bad Request")),
    };

    let mut session = Session::open(config, Route::Contact)?;
    let submitter = HttpSubmitter::from_config(config);
    if let FormState::Success(_) = session.submit(ContactForm::from_urlencoded(body), &submitter) {
        log!("form"; "enquiry relayed");
    }

    Ok(Reply::html(200, session.render()?))
}

fn render_route(route: Route, config: &SiteConfig) -> Result<Reply> {
    let html = Session::open(config, route)?.render()?;
    Ok(Reply::html(route.status(), html))
}

/// Resolve `rel` inside `root`, rejecting anything that could escape it.
fn asset_path(root: &Path, rel: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(rel).ok()?;
    let rel = Path::new(decoded.as_ref());
    if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(rel))
}

fn respond(request: Request, reply: Reply) -> Result<()> {
    let header = Header::from_bytes("Content-Type", reply.content_type)
        .map_err(|()| anyhow!("invalid content type: {}", reply.content_type))?;
    let response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(header);
    request.respond(response)?;
    Ok(())
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",

        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::from_str("[base]\nurl = \"https://example.com\"").unwrap();
        config.build.minify = false;
        config
    }

    fn text(body: &str) -> FormBody {
        FormBody::Text(body.to_owned())
    }

    fn body(reply: &Reply) -> String {
        String::from_utf8_lossy(&reply.body).into_owned()
    }

    #[test]
    fn test_get_routes() {
        let config = config();
        let reply = resolve_get("/services/?utm_source=ad", &config).unwrap();
        assert_eq!(reply.status, 200);
        assert!(body(&reply).contains(r#"href="https://example.com/services""#));

        let reply = resolve_get("/contact", &config).unwrap();
        assert!(body(&reply).contains(r#"action="/contact#contact-form-section""#));

        let reply = resolve_get("/nowhere", &config).unwrap();
        assert_eq!(reply.status, 404);
        assert!(body(&reply).contains("Page Not Found"));
    }

    #[test]
    fn test_get_sitemap() {
        let config = config();
        let reply = resolve_get("/sitemap.xml", &config).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "application/xml; charset=utf-8");
        assert!(body(&reply).contains("<loc>https://example.com/legal</loc>"));
    }

    #[test]
    fn test_get_assets() {
        let dir = TempDir::new().unwrap();
        let mut config = config();
        config.build.assets = dir.path().to_path_buf();
        fs::write(dir.path().join("site.css"), "nav{}").unwrap();

        let reply = resolve_get("/assets/site.css", &config).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "text/css; charset=utf-8");
        assert_eq!(body(&reply), "nav{}");

        let reply = resolve_get("/assets/missing.css", &config).unwrap();
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn test_asset_path_rejects_traversal() {
        let root = Path::new("/srv/assets");
        assert_eq!(asset_path(root, "img/logo.svg"), Some(root.join("img/logo.svg")));
        assert_eq!(asset_path(root, "../lexsite.toml"), None);
        assert_eq!(asset_path(root, "%2E%2E/lexsite.toml"), None);
        assert_eq!(asset_path(root, "/etc/passwd"), None);
    }

    #[test]
    fn test_post_invalid_form_renders_inline_error() {
        let config = config();
        let reply = resolve_post("/contact", &text("name=&phone=07700+900123"), &config).unwrap();
        let html = body(&reply);

        assert_eq!(reply.status, 200);
        assert!(html.contains("Please enter your name."));
        assert!(html.contains(r#"value="07700 900123""#));
    }

    #[test]
    fn test_post_limits() {
        let config = config();
        assert_eq!(resolve_post("/contact", &FormBody::TooLarge, &config).unwrap().status, 413);
        assert_eq!(resolve_post("/about", &text("name=x"), &config).unwrap().status, 405);
    }

    #[test]
    fn test_form_body_classification() {
        assert!(matches!(FormBody::from_bytes(b"name=Amira".to_vec()), FormBody::Text(t) if t == "name=Amira"));
        assert!(matches!(FormBody::from_bytes(vec![b'a'; MAX_FORM_BODY as usize + 1]), FormBody::TooLarge));

        let body = FormBody::from_bytes(vec![b'n', b'=', 0xff, 0xfe]);
        assert!(matches!(body, FormBody::NotUtf8));
        let reply = resolve_post("/contact", &body, &config()).unwrap();
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("a.woff2")), "font/woff2");
        assert_eq!(guess_content_type(Path::new("a.unknown")), "application/octet-stream");
    }
}
