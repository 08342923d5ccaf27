use std::fmt;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

/// Interpreter version, ordered field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("valid regex"))
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Accepts `3.11`, `3.11.4` and interpreter banners like `Python 3.11.4`.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let caps = version_re()
            .captures(s)
            .ok_or_else(|| anyhow::anyhow!("no version number in '{}'", s.trim()))?;
        let num = |i: usize| -> anyhow::Result<u32> {
            match caps.get(i) {
                Some(m) => Ok(m.as_str().parse()?),
                None => Ok(0),
            }
        };
        Ok(Self::new(num(1)?, num(2)?, num(3)?))
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Reports the version of the interpreter the project will run on.
#[async_trait]
pub trait RuntimeProbe: Send + Sync {
    fn name(&self) -> &str;
    async fn version(&self) -> anyhow::Result<RuntimeVersion>;
}
