//! In-process HTTP listener standing in for a Nexus instance.
//!
//! Tests queue one canned `(status, body)` response per expected request;
//! the listener serves them in order on a loopback port and records every
//! request target so assertions can inspect paths and query strings.
//!
//! Only what the client actually sends is supported: HTTP/1.1 GETs with no
//! body. Responses carry `Connection: close`, so each request arrives on a
//! fresh connection and the queue order matches the request order.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Handle to a running mock Nexus listener.
pub struct MockNexus {
    /// Base URL to hand to the client under test, e.g. `http://127.0.0.1:PORT`
    pub base_url: String,
    targets: mpsc::UnboundedReceiver<String>,
}

impl MockNexus {
    /// Next observed request target (`/path?query`), in arrival order.
    pub async fn next_target(&mut self) -> String {
        self.targets.recv().await.expect("listener closed")
    }

    /// Drain all request targets observed so far.
    pub fn recorded_targets(&mut self) -> Vec<String> {
        let mut targets = Vec::new();
        while let Ok(target) = self.targets.try_recv() {
            targets.push(target);
        }
        targets
    }
}

/// Serve the queued `(status, body)` responses to successive connections.
pub async fn spawn_server(responses: Vec<(u16, String)>) -> MockNexus {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            // Read the request head; tests only ever send GETs.
            let mut head = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request_line = String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            if let Some(target) = request_line.split_whitespace().nth(1) {
                let _ = tx.send(target.to_string());
            }

            let reason = match status {
                200 => "OK",
                401 => "Unauthorized",
                403 => "Forbidden",
                404 => "Not Found",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    MockNexus {
        base_url: format!("http://{addr}"),
        targets: rx,
    }
}
