//! Captures formatted `tracing` output for assertions.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
	fn write(&mut self, data: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(data);
		Ok(data.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Run `f` with a thread-local subscriber using `directive`, returning `f`'s
/// result and everything it logged.
pub fn capture<T>(directive: &str, f: impl FnOnce() -> T) -> (T, String) {
	let buf = Buffer::default();
	let writer = buf.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(directive))
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.finish();
	let out = tracing::subscriber::with_default(subscriber, f);
	let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
	(out, logged)
}
