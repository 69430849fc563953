//! One-shot HTTP responder for client tests.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

pub struct Captured {
	pub request_line: String,
	pub headers: Vec<String>,
	pub body: String,
}

impl Captured {
	pub fn header(&self, name: &str) -> Option<&str> {
		let prefix = format!("{}:", name.to_lowercase());
		self.headers.iter().find(|h| h.to_lowercase().starts_with(&prefix)).map(|h| h[prefix.len()..].trim())
	}
}

/// Serve a single request with `status` and `body`, returning the base URL and
/// a receiver yielding what the client sent.
pub fn serve_once(status: u16, body: &str) -> (String, mpsc::Receiver<Captured>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let body = body.to_string();
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let (stream, _) = listener.accept().unwrap();
		let mut reader = BufReader::new(stream.try_clone().unwrap());
		let mut request_line = String::new();
		reader.read_line(&mut request_line).unwrap();
		let mut headers = Vec::new();
		let mut content_length = 0usize;
		loop {
			let mut line = String::new();
			reader.read_line(&mut line).unwrap();
			let line = line.trim_end().to_string();
			if line.is_empty() {
				break;
			}
			if let Some(v) = line.to_lowercase().strip_prefix("content-length:") {
				content_length = v.trim().parse().unwrap_or(0);
			}
			headers.push(line);
		}
		let mut buf = vec![0u8; content_length];
		reader.read_exact(&mut buf).unwrap();
		let mut stream = stream;
		let response = format!(
			"HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			status,
			body.len(),
			body
		);
		stream.write_all(response.as_bytes()).unwrap();
		stream.flush().unwrap();
		let _ = tx.send(Captured { request_line: request_line.trim_end().to_string(), headers, body: String::from_utf8_lossy(&buf).into_owned() });
	});
	(format!("http://{}", addr), rx)
}
