use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Optional mapping from raw sender identity to display name.
///
/// Senders without an entry keep their raw identity.
///
/// # Examples
///
/// ```
/// use wordstat_analysis::names::NameMap;
///
/// let names: NameMap = serde_json::from_str(r#"{"ann@example.com": "Ann"}"#).unwrap();
/// assert_eq!(names.resolve("ann@example.com"), "Ann");
/// assert_eq!(names.resolve("bob@example.com"), "bob@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sender: impl Into<String>, name: impl Into<String>) {
        self.names.insert(sender.into(), name.into());
    }

    #[must_use]
    pub fn resolve<'a>(&'a self, sender: &'a str) -> &'a str {
        self.names.get(sender).map_or(sender, String::as_str)
    }
}

impl<S, N> FromIterator<(S, N)> for NameMap
where
    S: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (sender, name) in iter {
            map.insert(sender, name);
        }
        map
    }
}
