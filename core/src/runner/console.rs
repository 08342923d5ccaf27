use std::io::Write;
use std::sync::{Arc, Mutex};

/// Human-readable progress output. Writes go to stdout unless a capture
/// buffer was requested; line order is exactly call order.
#[derive(Clone)]
pub struct Console {
    sink: Sink,
}

#[derive(Clone)]
enum Sink {
    Stdout,
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl Console {
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    pub fn buffer() -> Self {
        Self {
            sink: Sink::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn line(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        match &self.sink {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout must not turn into a workflow failure.
                let _ = writeln!(out, "{msg}");
                let _ = out.flush();
            }
            Sink::Buffer(buf) => {
                if let Ok(mut buf) = buf.lock() {
                    let _ = writeln!(buf, "{msg}");
                }
            }
        }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.line(format!("✓ {}", msg.as_ref()));
    }

    pub fn failure(&self, msg: impl AsRef<str>) {
        self.line(format!("✗ {}", msg.as_ref()));
    }

    /// Captured text; empty for the stdout sink.
    pub fn captured(&self) -> String {
        match &self.sink {
            Sink::Stdout => String::new(),
            Sink::Buffer(buf) => buf
                .lock()
                .map(|b| String::from_utf8_lossy(&b).into_owned())
                .unwrap_or_default(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}
