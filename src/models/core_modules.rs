use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only lookup of privileged mod names to their canonical `module.json` source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct CoreModules(BTreeMap<String, String>);

impl CoreModules {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for CoreModules {
    fn default() -> Self {
        Self(BTreeMap::from([
            (
                "command".to_string(),
                "https://raw.githubusercontent.com/tera-toolbox/command/master/module.json"
                    .to_string(),
            ),
            (
                "tera-game-state".to_string(),
                "https://raw.githubusercontent.com/tera-toolbox/tera-game-state/master/module.json"
                    .to_string(),
            ),
        ]))
    }
}

impl FromIterator<(String, String)> for CoreModules {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_reserved_names() {
        let core = CoreModules::default();
        assert!(core.contains("command"));
        assert!(core.contains("tera-game-state"));
        assert!(!core.contains("Command"));
        assert_eq!(core.iter().count(), 2);
    }

    #[test]
    fn injected_table_replaces_defaults() {
        let core: CoreModules = [("mine".to_string(), "https://example.invalid/module.json".to_string())]
            .into_iter()
            .collect();
        assert!(core.contains("mine"));
        assert!(!core.contains("command"));
        assert_eq!(core.get("mine"), Some("https://example.invalid/module.json"));
    }
}
