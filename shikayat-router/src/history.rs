//! Session history model.
//!
//! The router never touches a real browser; it talks to a [`History`]
//! implementation that behaves like one. Pushing an entry discards everything
//! ahead of the current pointer, and moving back/forward only shifts the
//! pointer (the caller is then expected to deliver a popstate to the router).

/// Session history as seen by the router.
pub trait History: Send + 'static {
    /// The raw location of the current entry, query and fragment included.
    fn location(&self) -> &str;

    /// Append an entry after the current one and make it current.
    fn push(&mut self, url: String);

    /// Overwrite the current entry in place. Forward entries are kept.
    fn replace(&mut self, url: String);

    /// Move the pointer one entry back. Returns false at the oldest entry.
    fn back(&mut self) -> bool;

    /// Move the pointer one entry forward. Returns false at the newest entry.
    fn forward(&mut self) -> bool;

    /// Total number of entries.
    fn len(&self) -> usize;

    /// Position of the current entry.
    fn index(&self) -> usize;

    /// The path component of the current location.
    fn path(&self) -> &str {
        path_of(self.location())
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn can_go_back(&self) -> bool {
        self.index() > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index() + 1 < self.len()
    }
}

/// Strip query string and fragment from a location.
///
/// An empty remainder is reported as `/`.
pub fn path_of(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    match &location[..end] {
        "" => "/",
        path => path,
    }
}

/// In-memory history with browser semantics.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Create a history holding a single entry, the load-time location.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, url: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, url: String) {
        self.entries[self.index] = url;
    }

    fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_walk() {
        let mut history = MemoryHistory::new("/");
        history.push("/login".to_string());
        history.push("/dashboard".to_string());
        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), "/dashboard");

        assert!(history.back());
        assert_eq!(history.location(), "/login");
        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.location(), "/login");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/a".to_string());
        history.push("/b".to_string());
        history.back();
        history.back();
        history.push("/c".to_string());

        assert_eq!(history.entries(), ["/", "/c"]);
        assert!(!history.can_go_forward());
        assert!(history.can_go_back());
    }

    #[test]
    fn test_replace_keeps_length_and_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/file-complaint?department=roads".to_string());
        history.push("/about".to_string());
        history.back();
        history.replace("/dashboard".to_string());

        assert_eq!(history.entries(), ["/", "/dashboard", "/about"]);
        assert_eq!(history.location(), "/dashboard");
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_path_strips_query_and_fragment() {
        assert_eq!(path_of("/complaints?status=open"), "/complaints");
        assert_eq!(path_of("/faq#filing"), "/faq");
        assert_eq!(path_of("/a?x=1#y"), "/a");
        assert_eq!(path_of("?x=1"), "/");
        assert_eq!(path_of(""), "/");

        let history = MemoryHistory::new("/authorities/police?tab=staff");
        assert_eq!(history.path(), "/authorities/police");
    }
}
