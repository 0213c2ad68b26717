use super::record::FileRecord;

/// Append-only byte buffer holding every combined block of one run
///
/// Each block is `=== <path> ===\n<content>\n\n`.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
    blocks: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file as a labelled block
    pub fn append(&mut self, record: &FileRecord) {
        self.bytes.extend_from_slice(b"=== ");
        self.bytes.extend_from_slice(record.display_path().as_bytes());
        self.bytes.extend_from_slice(b" ===\n");
        self.bytes.extend_from_slice(&record.content);
        self.bytes.extend_from_slice(b"\n\n");
        self.blocks += 1;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.blocks
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, content: &[u8]) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            size: content.len() as u64,
            content: content.to_vec(),
        }
    }

    #[test]
    fn test_block_layout_is_byte_exact() {
        let mut buffer = OutputBuffer::new();
        buffer.append(&record("root/a.go", b"x"));
        assert_eq!(buffer.as_bytes(), b"=== root/a.go ===\nx\n\n");
        assert_eq!(buffer.block_count(), 1);
    }

    #[test]
    fn test_blocks_keep_append_order() {
        let mut buffer = OutputBuffer::new();
        buffer.append(&record("b.txt", b"second?"));
        buffer.append(&record("a.txt", b""));
        assert_eq!(
            buffer.into_bytes(),
            b"=== b.txt ===\nsecond?\n\n=== a.txt ===\n\n\n".to_vec()
        );
    }

    #[test]
    fn test_content_is_copied_raw() {
        let mut buffer = OutputBuffer::new();
        buffer.append(&record("bin.dat", &[0, 159, 255, b'\n']));
        assert_eq!(
            &buffer.as_bytes()[16..20],
            &[0, 159, 255, b'\n'],
            "binary content must not be re-encoded"
        );
        assert!(!buffer.is_empty());
    }
}
