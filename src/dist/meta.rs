use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Pin;

/// The complete metadata record for one distributable unit.
///
/// A record is built fresh on every invocation and handed to the consumer
/// whole; nothing is persisted and no field is filled in lazily. The same
/// source tree and the same declared configuration always produce the same
/// record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DistMeta {
    pub name: String,
    /// Canonical version, read from the library's own version attribute.
    pub version: String,
    /// Runtime constraint as declared, e.g. `>=3.5`.
    pub python_requires: String,
    pub author: String,
    pub author_email: String,
    pub url: String,
    pub description: String,
    pub license: String,
    /// Exact pins, in declaration order.
    pub requires: Vec<Pin>,
    /// Discovered packages, sorted lexicographically.
    pub packages: Vec<String>,
    pub zip_safe: bool,
}

impl DistMeta {
    /// The minimum supported runtime version without the bound operator,
    /// so `>=3.5` yields `3.5`.
    pub fn minimum_python(&self) -> &str {
        self.python_requires.trim_start_matches(">=").trim()
    }

    /// Validation issues on the record, empty when it is well formed.
    ///
    /// Every declared field must be non-empty, every pin complete, and no
    /// dependency pinned twice.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("version", &self.version),
            ("python_requires", &self.python_requires),
            ("author", &self.author),
            ("author_email", &self.author_email),
            ("url", &self.url),
            ("description", &self.description),
            ("license", &self.license),
        ] {
            if value.trim().is_empty() {
                issues.push(format!("{} must not be empty", field));
            }
        }

        for pin in &self.requires {
            if pin.name.trim().is_empty() || pin.version.trim().is_empty() {
                issues.push(format!("incomplete pin {:?}", pin.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for pin in &self.requires {
            if !seen.insert(pin.name.as_str()) {
                issues.push(format!("{} is pinned more than once", pin.name));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meta() -> DistMeta {
        DistMeta {
            name: "d2l".to_string(),
            version: "1.0.3".to_string(),
            python_requires: ">=3.5".to_string(),
            author: "D2L Developers".to_string(),
            author_email: "d2l.devs@gmail.com".to_string(),
            url: "https://d2l.ai".to_string(),
            description: "Dive into Deep Learning".to_string(),
            license: "MIT-0".to_string(),
            requires: vec![Pin::new("jupyter", "1.0.0"), Pin::new("numpy", "1.21.5")],
            packages: vec!["d2l".to_string(), "d2l.torch".to_string()],
            zip_safe: true,
        }
    }

    #[test]
    fn test_minimum_python_strips_bound_operator() {
        let mut meta = sample_meta();
        assert_eq!(meta.minimum_python(), "3.5");

        meta.python_requires = ">= 3.5".to_string();
        assert_eq!(meta.minimum_python(), "3.5");

        meta.python_requires = "3.5".to_string();
        assert_eq!(meta.minimum_python(), "3.5");
    }

    #[test]
    fn test_issues_empty_for_well_formed_record() {
        assert!(sample_meta().issues().is_empty());
    }

    #[test]
    fn test_issues_reports_empty_fields() {
        let mut meta = sample_meta();
        meta.author = String::new();
        meta.license = "  ".to_string();

        let issues = meta.issues();
        assert_eq!(issues.len(), 2);
        assert!(issues.contains(&"author must not be empty".to_string()));
        assert!(issues.contains(&"license must not be empty".to_string()));
    }

    #[test]
    fn test_issues_reports_duplicate_pins() {
        let mut meta = sample_meta();
        meta.requires.push(Pin::new("numpy", "1.22.0"));

        let issues = meta.issues();
        assert_eq!(issues, vec!["numpy is pinned more than once"]);
    }

    #[test]
    fn test_issues_reports_incomplete_pins() {
        let mut meta = sample_meta();
        meta.requires.push(Pin::new("requests", ""));

        let issues = meta.issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("incomplete pin"));
    }

    #[test]
    fn test_serialized_record_keeps_pin_order() {
        let value = serde_json::to_value(sample_meta()).unwrap();

        assert_eq!(value["name"], "d2l");
        assert_eq!(value["zip_safe"], true);
        assert_eq!(value["requires"][0]["name"], "jupyter");
        assert_eq!(value["requires"][1]["version"], "1.21.5");
        assert_eq!(value["packages"][1], "d2l.torch");
    }
}
