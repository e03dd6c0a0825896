use regex::{Captures, Regex};
use std::fmt;
use std::io;
use std::sync::LazyLock;
use tracing_subscriber::fmt::MakeWriter;

static SCRUBBER: LazyLock<SecretScrubber> = LazyLock::new(SecretScrubber::new);

/// Masks credentials in text before it reaches a log sink
#[derive(Clone)]
pub struct SecretScrubber {
    google_key_pattern: Regex,
    key_param_pattern: Regex,
    header_pattern: Regex,
    token_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    pub fn new() -> Self {
        Self {
            // Google AI keys: AIza + 35 url-safe characters
            google_key_pattern: Regex::new(r"AIza[0-9A-Za-z_\-]{35}").expect("static pattern"),
            // ?key=... query parameters
            key_param_pattern: Regex::new(r"([?&]key=)[^&\s]+").expect("static pattern"),
            header_pattern: Regex::new(r#"(?i)(x-goog-api-key["']?\s*[:=]\s*["']?)[^"'\s,}]+"#)
                .expect("static pattern"),
            token_pattern: Regex::new(
                r#"["']?(?:api_key|apikey|token|secret)["']?\s*[:=]\s*["']?([a-zA-Z0-9\-_\.]{16,})["']?"#,
            )
            .expect("static pattern"),
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("static pattern"),
        }
    }

    /// Process-wide instance
    pub fn global() -> &'static Self {
        &SCRUBBER
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .google_key_pattern
            .replace_all(message, "[API_KEY_REDACTED]")
            .into_owned();
        scrubbed = self
            .key_param_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .into_owned();
        scrubbed = self
            .header_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .into_owned();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .into_owned();
        self.token_pattern
            .replace_all(&scrubbed, |caps: &Captures| {
                let full_match = &caps[0];
                full_match
                    .find([':', '='])
                    .map_or_else(
                        || "[REDACTED]".to_string(),
                        |pos| format!("{}[REDACTED]", &full_match[..=pos]),
                    )
            })
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish_non_exhaustive()
    }
}

/// `MakeWriter` that scrubs every formatted event before forwarding it
///
/// The fmt layer hands each event to the writer as one buffer, so patterns
/// never straddle two writes.
#[derive(Clone, Debug)]
pub struct ScrubbingMakeWriter<M> {
    inner: M,
}

impl<M> ScrubbingMakeWriter<M> {
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for ScrubbingMakeWriter<M> {
    type Writer = ScrubbingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        ScrubbingWriter {
            inner: self.inner.make_writer(),
        }
    }
}

pub struct ScrubbingWriter<W> {
    inner: W,
}

impl<W: io::Write> io::Write for ScrubbingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let scrubbed = SecretScrubber::global().scrub_message(&text);
        self.inner.write_all(scrubbed.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
