//! Job frame domain type

use std::fmt;

use crate::protocol::JOB_PREFIX;

/// A single `JOB:<script>` frame
///
/// The script text is carried verbatim: no escaping, no terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFrame {
    text: String,
}

impl JobFrame {
    /// Build the frame for a script
    pub fn new(script: impl AsRef<str>) -> Self {
        Self {
            text: format!("{}{}", JOB_PREFIX, script.as_ref()),
        }
    }

    /// The script portion of the frame
    pub fn script(&self) -> &str {
        &self.text[JOB_PREFIX.len()..]
    }

    /// Bytes to put on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for JobFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_prefixes_script() {
        let frame = JobFrame::new("lua -e \"print(1)\"");
        assert_eq!(frame.as_str(), "JOB:lua -e \"print(1)\"");
        assert_eq!(frame.script(), "lua -e \"print(1)\"");
    }

    #[test]
    fn test_frame_has_no_terminator() {
        let frame = JobFrame::new("echo hi");
        assert!(!frame.as_bytes().ends_with(b"\n"));
        assert!(!frame.as_bytes().ends_with(b"\0"));
    }

    #[test]
    fn test_empty_script_is_bare_prefix() {
        let frame = JobFrame::new("");
        assert_eq!(frame.to_string(), "JOB:");
        assert_eq!(frame.script(), "");
    }
}
