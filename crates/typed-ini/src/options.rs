#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Trim spaces and tabs around keys and values before they are stored.
    ///
    /// Off by default: keys and values keep every character between the line
    /// start, the first `=` and the comment marker, so `a = 1` stores the key
    /// `"a "` and the value `" 1"` (which infers as [`Value::Empty`]).
    ///
    /// [`Value::Empty`]: crate::Value::Empty
    pub trim_whitespace: bool,
}

impl Options {
    pub fn trimmed() -> Self {
        Self {
            trim_whitespace: true,
        }
    }
}
