//! Routes `tracing` output to the browser console.

use std::io;
use tracing::Level;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console.log` on drop.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

/// Installs the console subscriber. Later calls are no-ops.
///
/// Timestamps are off: `SystemTime` is unavailable on wasm32.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
