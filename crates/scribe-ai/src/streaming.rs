//! Plain-text streaming decoder.
//!
//! The completion endpoint streams raw UTF-8 text in arbitrary byte chunks.
//! A multi-byte character may straddle two chunks, so decoding carries the
//! incomplete tail of one chunk over to the next.

use futures_util::{Stream, StreamExt};

use crate::AiError;

/// Incremental UTF-8 decoder that accumulates the full text.
///
/// Invalid sequences become U+FFFD, like a non-fatal text decoder.
#[derive(Debug, Default)]
pub struct Utf8Accumulator {
    text: String,
    pending: Vec<u8>,
}

impl Utf8Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return the text it completed.
    pub fn push(&mut self, bytes: &[u8]) -> &str {
        let start = self.text.len();
        self.pending.extend_from_slice(bytes);

        let mut consumed = 0;
        while consumed < self.pending.len() {
            match std::str::from_utf8(&self.pending[consumed..]) {
                Ok(valid) => {
                    self.text.push_str(valid);
                    consumed = self.pending.len();
                }
                Err(e) => {
                    let valid_end = consumed + e.valid_up_to();
                    self.text
                        .push_str(&String::from_utf8_lossy(&self.pending[consumed..valid_end]));
                    consumed = valid_end;
                    match e.error_len() {
                        Some(len) => {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            consumed += len;
                        }
                        // Incomplete sequence at the end: wait for the next chunk.
                        None => break,
                    }
                }
            }
        }
        self.pending.drain(..consumed);

        &self.text[start..]
    }

    /// Everything decoded so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Finish decoding; a dangling partial sequence becomes U+FFFD.
    pub fn finish(mut self) -> String {
        if !self.pending.is_empty() {
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
        self.text
    }
}

/// Drain a byte stream into text, calling `on_chunk` with each newly decoded
/// fragment. The full text is returned only once the stream ends.
pub async fn decode_text_stream<S, B, E>(
    stream: S,
    mut on_chunk: impl FnMut(&str),
) -> Result<String, AiError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    futures_util::pin_mut!(stream);
    let mut decoder = Utf8Accumulator::new();

    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|e| AiError::NetworkError(e.to_string()))?;
        let fresh = decoder.push(bytes.as_ref());
        if !fresh.is_empty() {
            on_chunk(fresh);
        }
    }

    Ok(decoder.finish())
}
