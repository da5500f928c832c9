//! Remote reads against the repository host.
//!
//! Everything Folio learns about the outside world goes through
//! [`HttpClient`]: the repository listing, README documents, and image
//! probes. Generation code depends on the trait so tests can script
//! responses without touching the network.

use std::time::Duration;

use thiserror::Error;

/// User agent sent with every request. The GitHub API rejects anonymous
/// requests without one.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Default global timeout per request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure of a single remote read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not an image (content type {content_type})")]
    NotImage { url: String, content_type: String },

    #[error("failed to read body of {url}: {message}")]
    Body { url: String, message: String },
}

/// Blocking read access to remote resources.
pub trait HttpClient {
    /// Fetches `url` with GET and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not valid UTF8.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// Checks whether `url` would load as an image.
    ///
    /// The resource loads when the request succeeds and the reported
    /// content type, if any, is `image/*`.
    ///
    /// # Errors
    ///
    /// Returns error describing why the image would fail to load.
    fn probe_image(&self, url: &str) -> Result<(), FetchError>;
}

/// [`HttpClient`] backed by a shared `ureq` agent.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Creates client with a global timeout applied to every request.
    pub fn new(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self { agent }
    }

    fn head(&self, url: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .agent
            .head(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| map_ureq_error(url, e))?;

        Ok(content_type(response.headers()))
    }

    fn get_discarding_body(&self, url: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| map_ureq_error(url, e))?;

        Ok(content_type(response.headers()))
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpClient for UreqClient {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "GET");

        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| map_ureq_error(url, e))?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn probe_image(&self, url: &str) -> Result<(), FetchError> {
        tracing::debug!(url, "probe");

        // Some hosts refuse HEAD outright; a browser would have used GET.
        let content_type = match self.head(url) {
            Err(FetchError::Status { status: 405, .. }) => self.get_discarding_body(url)?,
            other => other?,
        };

        check_image_content_type(url, content_type.as_deref())
    }
}

fn content_type(headers: &ureq::http::HeaderMap) -> Option<String> {
    headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

fn map_ureq_error(url: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(status) => FetchError::Status {
            url: url.to_string(),
            status,
        },
        other => FetchError::Transport {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

/// Accepts a missing content type or any `image/*` media type.
pub(crate) fn check_image_content_type(
    url: &str,
    content_type: Option<&str>,
) -> Result<(), FetchError> {
    let Some(content_type) = content_type else {
        return Ok(());
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(FetchError::NotImage {
            url: url.to_string(),
            content_type: content_type.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn test_image_content_type_accepted() {
        assert!(check_image_content_type("u", Some("image/png")).is_ok());
        assert!(check_image_content_type("u", Some("image/svg+xml; charset=utf-8")).is_ok());
        assert!(check_image_content_type("u", Some("IMAGE/JPEG")).is_ok());
    }

    #[test]
    fn test_missing_content_type_accepted() {
        assert!(check_image_content_type("u", None).is_ok());
    }

    #[test]
    fn test_html_content_type_rejected() {
        // Arrange
        let url = "https://example.com/page";

        // Act
        let result = check_image_content_type(url, Some("text/html; charset=utf-8"));

        // Assert
        match result {
            Err(FetchError::NotImage { url: failed, content_type }) => {
                assert_eq!(failed, url);
                assert!(content_type.starts_with("text/html"));
            }
            other => panic!("Expected NotImage error, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            url: "https://example.com/x".to_string(),
            status: 404,
        };

        assert_eq!(err.to_string(), "https://example.com/x returned HTTP 404");
    }

    /// Canned response for one request method.
    struct Route {
        method: &'static str,
        status: &'static str,
        content_type: Option<&'static str>,
        body: &'static str,
    }

    impl Route {
        fn new(method: &'static str, status: &'static str) -> Self {
            Self {
                method,
                status,
                content_type: None,
                body: "",
            }
        }

        fn content_type(mut self, content_type: &'static str) -> Self {
            self.content_type = Some(content_type);
            self
        }

        fn body(mut self, body: &'static str) -> Self {
            self.body = body;
            self
        }
    }

    /// Serves `routes` on a local port, one connection per request.
    ///
    /// Methods without a route get 404. Returns the resource URL and the
    /// methods received so far.
    fn serve(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Should bind local port");
        let addr = listener.local_addr().expect("Should have local address");
        let methods = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&methods);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    break;
                };
                let Ok(read_half) = stream.try_clone() else {
                    continue;
                };
                let mut reader = BufReader::new(read_half);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                    }
                }

                let method = request_line
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();
                let response = match routes.iter().find(|r| r.method == method) {
                    Some(route) => {
                        let content_type = route
                            .content_type
                            .map(|c| format!("Content-Type: {c}\r\n"))
                            .unwrap_or_default();
                        format!(
                            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            route.status,
                            content_type,
                            route.body.len(),
                            if method == "HEAD" { "" } else { route.body }
                        )
                    }
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string(),
                };
                seen.lock().expect("Should lock").push(method);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        (format!("http://{addr}/preview.png"), methods)
    }

    fn client() -> UreqClient {
        UreqClient::new(Duration::from_secs(5))
    }

    #[test]
    fn test_probe_retries_get_after_head_405() {
        // Arrange
        let (url, methods) = serve(vec![
            Route::new("HEAD", "405 Method Not Allowed"),
            Route::new("GET", "200 OK").content_type("image/png"),
        ]);

        // Act
        let result = client().probe_image(&url);

        // Assert
        assert!(result.is_ok(), "Expected image after GET retry, got {:?}", result);
        assert_eq!(*methods.lock().expect("Should lock"), vec!["HEAD", "GET"]);
    }

    #[test]
    fn test_probe_head_404_is_status_error() {
        // Arrange
        let (url, methods) = serve(vec![]);

        // Act
        let result = client().probe_image(&url);

        // Assert
        match result {
            Err(FetchError::Status { url: failed, status }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
        assert_eq!(
            *methods.lock().expect("Should lock"),
            vec!["HEAD"],
            "Only 405 triggers the GET retry"
        );
    }

    #[test]
    fn test_probe_html_response_is_not_image() {
        let (url, _) = serve(vec![
            Route::new("HEAD", "200 OK").content_type("text/html; charset=utf-8"),
        ]);

        let result = client().probe_image(&url);

        assert!(
            matches!(result, Err(FetchError::NotImage { .. })),
            "Expected NotImage, got {:?}",
            result
        );
    }

    #[test]
    fn test_get_text_reads_body() {
        let (url, _) = serve(vec![Route::new("GET", "200 OK").body("# Readme")]);

        let text = client().get_text(&url).expect("Body should be read");

        assert_eq!(text, "# Readme");
    }

    #[test]
    fn test_get_text_server_error_is_status_error() {
        let (url, _) = serve(vec![Route::new("GET", "500 Internal Server Error")]);

        let result = client().get_text(&url);

        assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));
    }
}
