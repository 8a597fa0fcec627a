use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use zstd::stream::read::Decoder;

/// Whether `path` names a zstd-compressed dump (`*.zst`).
pub fn is_zst(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("zst"))
}

/// A `Read` wrapper that counts on-disk bytes read.
struct CountingReader<R: Read> {
    inner: R,
    counter: Arc<AtomicU64>,
}
impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counter.fetch_add(n as u64, Ordering::Relaxed);
        Ok(n)
    }
}

/// Stream `path` line by line (plain text, or zstd when the name ends in `.zst`),
/// calling `on_line` with each line minus its `\r?\n` terminator.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// `on_progress(delta)` receives on-disk bytes consumed since the previous call.
/// Open, read and decode failures are returned with the path attached; the
/// file handle is released on every exit path.
pub fn for_each_line(
    path: &Path,
    read_buf_bytes: usize,
    mut on_progress: impl FnMut(u64),
    mut on_line: impl FnMut(&str),
) -> Result<()> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let counter = Arc::new(AtomicU64::new(0));
    let counted = CountingReader { inner: file, counter: counter.clone() };
    let cap = read_buf_bytes.max(8 * 1024);

    let mut reader: Box<dyn BufRead> = if is_zst(path) {
        let mut decoder = Decoder::new(counted).with_context(|| format!("zstd init {}", path.display()))?;
        decoder.window_log_max(31).with_context(|| format!("zstd window {}", path.display()))?;
        Box::new(BufReader::with_capacity(cap, decoder))
    } else {
        Box::new(BufReader::with_capacity(cap, counted))
    };

    let mut buf: Vec<u8> = Vec::with_capacity(16 * 1024);
    let mut last = 0u64;
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).with_context(|| format!("read {}", path.display()))?;
        let cur = counter.load(Ordering::Relaxed);
        if cur > last {
            on_progress(cur - last);
            last = cur;
        }
        if n == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            let _ = buf.pop();
            if buf.ends_with(b"\r") { let _ = buf.pop(); }
        }
        // Invalid UTF-8 only damages its own line.
        on_line(&String::from_utf8_lossy(&buf));
    }
    Ok(())
}
