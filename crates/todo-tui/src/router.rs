use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/todos/{id}`; the id stays textual until the edit screen looks it up
    EditTask(String),
}

impl Route {
    pub fn edit(id: impl fmt::Display) -> Self {
        Self::EditTask(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::EditTask(id) => format!("/todos/{}", id),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" || path.is_empty() {
            return Some(Self::List);
        }
        let id = path.strip_prefix("/todos/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self::EditTask(id.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation stack rooted at the list screen
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    pub fn current(&self) -> &Route {
        // stack is never empty: back() keeps the root
        self.stack.last().unwrap_or(&Route::List)
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!("Navigate {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// Pop to the previous screen; returns false at the root
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
