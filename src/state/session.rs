//! Read-only display context for the signed-in viewer.

/// Display fields for the current viewer.
///
/// Built once at startup from configuration and handed to rendering by
/// reference. Nothing writes to it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new(username: Option<String>) -> Self {
        let username = username
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Self { username }
    }

    pub fn guest() -> Self {
        Self::default()
    }

    /// Header greeting.
    pub fn greeting(&self) -> String {
        match &self.username {
            Some(name) => format!("Hi, {}", name),
            None => "Guest".to_string(),
        }
    }
}
