//! Throw-away HTTP responders for exercising the fetchers without a network.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::config::Config;

pub(crate) struct CannedServer {
    pub base_url: String,
    /// Request head (request line + headers) of the single accepted request.
    pub requests: Receiver<String>,
}

/// Answer exactly one request with `status_line` and `body`.
pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let head = read_request_head(&mut stream);
        let _ = tx.send(head);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    CannedServer {
        base_url: format!("http://{addr}"),
        requests: rx,
    }
}

/// Accept one connection and never answer it.
pub(crate) fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let _ = read_request_head(&mut stream);
            thread::sleep(Duration::from_secs(3));
        }
    });

    format!("http://{addr}")
}

/// Builtin config pointed at a local responder, bypassing any proxy from the environment.
pub(crate) fn config_for(base_url: &str) -> Config {
    let mut config = Config::builtin();
    config.endpoints.quote = format!("{base_url}/v7/finance/quote");
    config.endpoints.chart = format!("{base_url}/v8/finance/chart");
    config.endpoints.timeout = Duration::from_secs(5);
    config.endpoints.use_system_proxy = false;
    config
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
