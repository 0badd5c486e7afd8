use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Canned response for one stub route.
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Matches when the request line contains `matcher`, so "POST /golfer_login"
/// and "page=2" both work. First matching route wins.
pub struct StubRoute {
    pub matcher: String,
    pub response: StubResponse,
    pub hits: Arc<AtomicUsize>,
}

impl StubRoute {
    pub fn new(matcher: &str, response: StubResponse) -> Self {
        Self {
            matcher: matcher.to_string(),
            response,
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Scripted HTTP/1.1 server on a free localhost port, so the real client
/// stack gets exercised without touching the network. Unmatched requests
/// get a 404, which makes an unexpected extra page request fail loudly.
pub struct StubServer {
    pub base_url: String,
    pub total_hits: Arc<AtomicUsize>,
    pub routes: Arc<Vec<StubRoute>>,
}

impl StubServer {
    pub async fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let base_url = format!("http://{}", listener.local_addr().expect("stub addr"));
        let total_hits = Arc::new(AtomicUsize::new(0));
        let routes = Arc::new(routes);

        let accept_routes = Arc::clone(&routes);
        let accept_hits = Arc::clone(&total_hits);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&accept_routes);
                let hits = Arc::clone(&accept_hits);
                tokio::spawn(async move {
                    handle_connection(stream, &routes, &hits).await;
                });
            }
        });

        Self {
            base_url,
            total_hits,
            routes,
        }
    }

    #[allow(dead_code)]
    pub fn route_hits(&self, index: usize) -> usize {
        self.routes[index].hits.load(Ordering::SeqCst)
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: &[StubRoute],
    total: &Arc<AtomicUsize>,
) {
    let Some(request_line) = read_request(&mut stream).await else {
        return;
    };
    total.fetch_add(1, Ordering::SeqCst);

    let matched = routes
        .iter()
        .find(|route| request_line.contains(&route.matcher));
    let (status, body, delay) = match matched {
        Some(route) => {
            route.hits.fetch_add(1, Ordering::SeqCst);
            (
                route.response.status,
                route.response.body.clone(),
                route.response.delay,
            )
        }
        None => (404, String::from("{\"error\":\"no stub route\"}"), None),
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.flush().await;
}

// Reads the whole request (headers plus Content-Length body) and returns
// the request line. Responding before the body is fully read makes the
// client side flaky, so drain first.
async fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    head.lines().next().map(ToString::to_string)
}
