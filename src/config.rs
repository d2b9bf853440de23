use crate::cipher::CharRange;

/// Longest message, in bytes, the command line accepts.
pub const MAX_MESSAGE_LEN: usize = 1023;

/// Settings threaded through a single invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Characters subject to transformation
    pub range: CharRange,
    /// Messages longer than this are rejected, never truncated
    pub max_message_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: CharRange::UPPERCASE,
            max_message_len: MAX_MESSAGE_LEN,
        }
    }
}
