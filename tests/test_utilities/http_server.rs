use depviz::prelude::HttpClientSettings;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Client settings for talking to the loopback servers below
///
/// Proxy variables are ignored so a CI `HTTP_PROXY` cannot intercept
/// requests to 127.0.0.1.
pub fn loopback_settings(timeout: Duration) -> HttpClientSettings {
    HttpClientSettings {
        timeout,
        user_agent: "depviz-test".to_string(),
        use_env_proxy: false,
    }
}

/// Serves exactly one HTTP response on a local port and returns the base URL
///
/// The response is sent once the request headers have been read, then the
/// connection is closed.
pub fn serve_once(status_line: &str, body: &[u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        }
    });

    base_url
}

/// Accepts one connection and never answers it
///
/// The connection is held open until the client gives up and disconnects.
pub fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
            }
        }
    });

    base_url
}

/// Returns a base URL on a local port with no listener behind it
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub const SIMPLE_INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <h1>Links for numpy</h1>
    <a href="https://files.example/numpy-1.23.0.tar.gz#sha256=abc">numpy-1.23.0.tar.gz</a><br />
    <a href="https://files.example/numpy-1.24.0.tar.gz#sha256=def">numpy-1.24.0.tar.gz</a><br />
  </body>
</html>
"#;
