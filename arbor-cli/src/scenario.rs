//! Scenario files and their execution against a tree.
//!
//! A scenario is a YAML document listing tree operations in order:
//!
//! ```yaml
//! name: remove-root
//! log_level: debug
//! operations:
//!   - insert: { key: 5, value: five }
//!   - insert: { key: 3 }
//!   - remove: 5
//!   - find: 3
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arbor::tree::BinarySearchTree;
use serde::Deserialize;
use tracing::{debug, info};

/// Scenario configuration from YAML
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: Option<String>,
    pub log_level: Option<String>,
    /// Each step is a single-key map such as `insert: { key: 5 }` or `remove: 5`.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub operations: Vec<Operation>,
}

/// A single step of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Inserts or overwrites a key. Without a value the key's own text is stored.
    Insert { key: i64, value: Option<String> },
    Remove(i64),
    Find(i64),
}

impl Scenario {
    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse scenario YAML")
    }

    /// Builds a scenario that inserts `keys` and then removes `removals`.
    pub fn from_keys(keys: &[i64], removals: &[i64]) -> Self {
        let inserts = keys.iter().map(|key| Operation::Insert {
            key: *key,
            value: None,
        });
        let removes = removals.iter().copied().map(Operation::Remove);
        Self {
            name: None,
            log_level: None,
            operations: inserts.chain(removes).collect(),
        }
    }

    /// Applies every operation to a fresh tree.
    pub fn run(&self) -> Report {
        let mut tree = BinarySearchTree::new();
        let mut findings = Vec::new();

        for operation in &self.operations {
            match operation {
                Operation::Insert { key, value } => {
                    let value = value.clone().unwrap_or_else(|| key.to_string());
                    let previous = tree.insert(*key, value);
                    debug!(key, replaced = previous.is_some(), "insert");
                }
                Operation::Remove(key) => {
                    let removed = tree.remove(key);
                    debug!(key, found = removed.is_some(), "remove");
                }
                Operation::Find(key) => {
                    let value = tree.lookup(key).ok().cloned();
                    debug!(key, found = value.is_some(), "find");
                    findings.push((*key, value));
                }
            }
        }

        info!(
            scenario = self.name.as_deref().unwrap_or("inline"),
            operations = self.operations.len(),
            size = tree.len(),
            "scenario finished"
        );

        Report { tree, findings }
    }
}

/// The outcome of running a scenario.
pub struct Report {
    pub tree: BinarySearchTree<i64, String>,
    pub findings: Vec<(i64, Option<String>)>,
}

impl Report {
    pub fn in_order(&self) -> Vec<i64> {
        self.tree.keys().copied().collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "{}", self.tree.pretty())?;
        writeln!(formatter)?;

        let keys: Vec<String> = self.in_order().iter().map(ToString::to_string).collect();
        writeln!(formatter, "In-order: [{}]", keys.join(", "))?;
        for (key, value) in &self.findings {
            match value {
                Some(value) => writeln!(formatter, "Find {key}: {value}")?,
                None => writeln!(formatter, "Find {key}: not found")?,
            }
        }

        let verdict = if self.tree.is_balanced() {
            "balanced"
        } else {
            "not balanced"
        };
        write!(formatter, "Tree is {verdict}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_parse_all_operation_kinds() {
        let scenario = Scenario::parse(
            "name: demo\n\
             operations:\n\
             \x20 - insert: { key: 5, value: five }\n\
             \x20 - insert: { key: 3 }\n\
             \x20 - remove: 5\n\
             \x20 - find: 3\n",
        )
        .unwrap();

        assert_eq!(scenario.name.as_deref(), Some("demo"));
        assert_eq!(scenario.log_level, None);
        assert_eq!(
            scenario.operations,
            vec![
                Operation::Insert {
                    key: 5,
                    value: Some("five".to_owned())
                },
                Operation::Insert {
                    key: 3,
                    value: None
                },
                Operation::Remove(5),
                Operation::Find(3),
            ]
        );
    }

    #[rstest]
    #[case("remove-root.yaml", Some("debug"), vec![1, 3, 4, 7, 8, 9])]
    #[case("ascending-chain.yaml", None, vec![1, 2, 3, 4, 5, 6])]
    fn test_load_shipped_scenarios(
        #[case] file: &str,
        #[case] log_level: Option<&str>,
        #[case] in_order: Vec<i64>,
    ) {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("scenarios")
            .join(file);
        let scenario = Scenario::load(&path).unwrap();

        assert_eq!(scenario.name.as_deref(), file.strip_suffix(".yaml"));
        assert_eq!(scenario.log_level.as_deref(), log_level);
        assert_eq!(scenario.run().in_order(), in_order);
    }

    #[rstest]
    fn test_remove_root_scenario_report() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/remove-root.yaml");
        let report = Scenario::load(&path).unwrap().run();

        assert_eq!(
            report.findings,
            vec![(4, Some("four".to_owned())), (5, None)]
        );
        let text = report.to_string();
        assert!(text.contains("In-order: [1, 3, 4, 7, 8, 9]"));
        assert!(text.contains("Find 4: four\nFind 5: not found"));
    }

    #[rstest]
    fn test_load_missing_file_names_the_path() {
        let error = Scenario::load(Path::new("no/such/scenario.yaml")).unwrap_err();
        assert!(error.to_string().contains("no/such/scenario.yaml"));
    }

    #[rstest]
    fn test_parse_rejects_unknown_operation() {
        assert!(Scenario::parse("operations:\n  - rotate: 4\n").is_err());
    }

    #[rstest]
    fn test_missing_operations_default_to_empty() {
        let report = Scenario::parse("name: nothing\n").unwrap().run();
        assert!(report.tree.is_empty());
        assert_eq!(report.to_string(), "(empty)\n\nIn-order: []\nTree is balanced");
    }

    #[rstest]
    fn test_run_removes_root_with_two_children() {
        let report = Scenario::from_keys(&[5, 3, 8, 1, 4, 7, 9], &[5]).run();
        assert_eq!(report.in_order(), vec![1, 3, 4, 7, 8, 9]);
        assert!(report.tree.is_balanced());
    }

    #[rstest]
    fn test_find_reports_stored_values() {
        let scenario = Scenario {
            name: None,
            log_level: None,
            operations: vec![
                Operation::Insert {
                    key: 2,
                    value: Some("two".to_owned()),
                },
                Operation::Find(2),
                Operation::Find(9),
            ],
        };
        let report = scenario.run();
        assert_eq!(
            report.findings,
            vec![(2, Some("two".to_owned())), (9, None)]
        );
        assert!(report.to_string().contains("Find 9: not found"));
    }

    #[rstest]
    fn test_report_layout() {
        let report = Scenario::from_keys(&[2, 1, 3], &[]).run();
        assert_eq!(
            report.to_string(),
            "    2\n   / \\\n  1   3\n\nIn-order: [1, 2, 3]\nTree is balanced"
        );
    }

    #[rstest]
    fn test_chain_is_not_balanced() {
        let report = Scenario::from_keys(&[1, 2, 3], &[]).run();
        assert!(report.to_string().ends_with("Tree is not balanced"));
    }
}
