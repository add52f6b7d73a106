// Console logging helpers
use std::io;

use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Buffers one formatted tracing event and writes it to the browser console on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            clog(String::from_utf8_lossy(&self.buf).trim_end());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Route `tracing` output to the console. `filter` uses `EnvFilter` directive syntax.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // no clock in wasm32-unknown-unknown, so no timestamps
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .try_init();
}

/// Signed pixel pair for readouts, e.g. `+12.5, -3.0`.
pub fn format_pair(x: f64, y: f64) -> String {
    format!("{:+.1}, {:+.1}", x, y)
}
