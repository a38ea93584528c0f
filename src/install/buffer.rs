/// Assembles a chunked diagnostic stream into complete lines.
///
/// Whatever follows the last newline is kept until a later chunk completes it.
/// Bytes are buffered rather than text so that a multi-byte character split
/// across two reads is decoded only once it is whole.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text chunk and returns the lines it completed, if any.
    ///
    /// Returns `None` when the buffer still holds no newline; the caller
    /// should wait for more data.
    pub fn append(&mut self, chunk: &str) -> Option<Vec<String>> {
        self.append_bytes(chunk.as_bytes())
    }

    /// Byte-level counterpart of [`LineBuffer::append`].
    ///
    /// Complete lines are decoded lossily; the trailing partial line is kept
    /// as raw bytes.
    pub fn append_bytes(&mut self, chunk: &[u8]) -> Option<Vec<String>> {
        self.pending.extend_from_slice(chunk);

        let last_newline = self.pending.iter().rposition(|b| *b == b'\n')?;
        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);

        // Drop the final newline so the split does not yield an empty tail.
        let complete = &complete[..complete.len() - 1];
        Some(
            complete
                .split(|b| *b == b'\n')
                .map(|line| String::from_utf8_lossy(line).into_owned())
                .collect(),
        )
    }

    /// The partial line retained for the next chunk.
    pub fn pending(&self) -> String {
        String::from_utf8_lossy(&self.pending).into_owned()
    }

    /// Drains the retained partial line once the stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending);
        Some(String::from_utf8_lossy(&rest).into_owned())
    }
}
