//! Test utilities and fixtures for freesound-attributor tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{serve_once, touch};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let base = serve_once("200 OK", "text/html", b"<html/>".to_vec()).await;
//!     // point a FreesoundClient at `base`
//! }
//! ```

use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Creates an empty file (and its parent directories) under `root`.
///
/// Returns the full path of the created file.
pub fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::File::create(&path).expect("Failed to create file");
    path
}

/// Serves a single HTTP response on a loopback port.
///
/// The listener accepts one connection, reads the request head, writes the
/// canned response and closes. Returns the `http://host:port` base URL.
pub async fn serve_once(status: &str, content_type: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_creates_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(dir.path(), "a/b/123__alice__kick.wav");
        assert!(path.is_file());
        assert!(path.ends_with("a/b/123__alice__kick.wav"));
    }

    #[tokio::test]
    async fn test_serve_once_answers_request() {
        let base = serve_once("200 OK", "text/plain", b"hello".to_vec()).await;
        let body = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("{}/anything", base))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }
}
