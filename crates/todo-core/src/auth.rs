use chrono::{DateTime, Duration, Utc};

/// Capability supplied by the identity provider that gates the app.
///
/// Screens and scripted commands only ask whether a user is signed in and
/// may end the session; signing in happens outside the app.
pub trait Authenticator: Send {
    fn is_authenticated(&self) -> bool;

    /// Display name of the signed-in user
    fn username(&self) -> Option<String>;

    fn sign_out(&mut self);
}

/// Session established before the app starts (from `--user`, `TODO_USER`
/// or the config file).
#[derive(Debug, Clone)]
pub struct LocalSession {
    username: Option<String>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl LocalSession {
    pub fn new(username: Option<String>) -> Self {
        let signed_in_at = username.as_ref().map(|_| Utc::now());
        if let (Some(name), Some(at)) = (&username, signed_in_at) {
            tracing::debug!("Session for {} started at {}", name, at.to_rfc3339());
        }
        Self {
            username,
            signed_in_at,
        }
    }

    /// Time signed in as of `now`, or `None` without a session
    pub fn session_length(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.signed_in_at.map(|start| now.signed_duration_since(start))
    }
}

impl Authenticator for LocalSession {
    fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    fn sign_out(&mut self) {
        let length = self.session_length(Utc::now());
        if let Some(name) = self.username.take() {
            tracing::info!(
                "Signed out {} after {}s",
                name,
                length.map_or(0, |d| d.num_seconds())
            );
        }
        self.signed_in_at = None;
    }
}
