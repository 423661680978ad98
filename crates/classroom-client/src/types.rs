//! Client configuration.

/// Default root of the assignment API.
pub const DEFAULT_ASSIGN_URL: &str = "http://localhost:5024/api/assignteacher";
/// Default root of the teacher profile API.
pub const DEFAULT_TEACHER_URL: &str = "https://localhost:5001/api/teacher";

/// Configuration for the Classroom client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the assignment API (`/teachers`, `/assignments`, `/assign`, ...).
    pub assignment_base_url: String,
    /// Root of the teacher profile collection.
    pub teacher_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            assignment_base_url: DEFAULT_ASSIGN_URL.to_string(),
            teacher_base_url: DEFAULT_TEACHER_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CLASSROOM_ASSIGN_URL`, `CLASSROOM_TEACHER_URL`
    /// and `CLASSROOM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("CLASSROOM_ASSIGN_URL") {
            config.assignment_base_url = url;
        }
        if let Some(url) = lookup("CLASSROOM_TEACHER_URL") {
            config.teacher_base_url = url;
        }
        if let Some(secs) = lookup("CLASSROOM_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            config.timeout_secs = secs;
        }
        config.normalized()
    }

    /// Same configuration with trailing slashes stripped from both roots.
    pub fn normalized(mut self) -> Self {
        self.assignment_base_url = self.assignment_base_url.trim_end_matches('/').to_string();
        self.teacher_base_url = self.teacher_base_url.trim_end_matches('/').to_string();
        self
    }
}
