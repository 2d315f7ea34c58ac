// Output capture for `.` and `,`

/// Append-only buffer collecting everything a program prints
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer {
            text: String::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Everything printed so far, in write order
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get all lines as a vector of strings
    pub fn lines(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
