//! Scripted adapter for the `RandomSource` port.

use std::sync::Mutex;

use crate::ports::RandomSource;

/// Serves bytes from a fixed script, in order.
///
/// Substituting a known byte sequence makes every minted identifier
/// predictable, so tests can assert exact output strings.
pub struct ScriptedRandomSource {
    script: Vec<u8>,
    cursor: Mutex<usize>,
}

impl ScriptedRandomSource {
    /// Creates a scripted source that will serve `script` front to back.
    #[must_use]
    pub fn new(script: Vec<u8>) -> Self {
        Self { script, cursor: Mutex::new(0) }
    }
}

impl RandomSource for ScriptedRandomSource {
    fn fill_bytes(&self, buf: &mut [u8]) {
        let mut cursor = self.cursor.lock().expect("script cursor lock poisoned");
        let end = *cursor + buf.len();
        assert!(
            end <= self.script.len(),
            "random script exhausted: need {} bytes, {} remain",
            buf.len(),
            self.script.len() - *cursor
        );
        buf.copy_from_slice(&self.script[*cursor..end]);
        *cursor = end;
    }
}
