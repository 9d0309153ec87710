//! The per-task variable snapshot that services are interpolated against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::variable::{ResolvedVariable, VariableSource};
use crate::error::{DomainError, DomainResult};

/// Variables visible to one task.
///
/// `env` holds the task's environment variables (`NOMAD_PORT_http`, user
/// supplied values, ...). `node_attrs` holds attributes of the node the task
/// runs on, keyed with their prefix (`attr.kernel.name`, `meta.rack`,
/// `node.unique.id`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnv {
    /// Task environment variables.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Node attributes and metadata.
    #[serde(default)]
    pub node_attrs: HashMap<String, String>,
}

impl TaskEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building an environment.
    #[must_use]
    pub fn builder() -> TaskEnvBuilder {
        TaskEnvBuilder::default()
    }

    /// Looks a variable up. Task variables shadow node attributes.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ResolvedVariable> {
        if let Some(value) = self.env.get(name) {
            return Some(ResolvedVariable::new(name, value.clone(), VariableSource::Env));
        }

        self.node_attrs
            .get(name)
            .map(|value| ResolvedVariable::new(name, value.clone(), VariableSource::Node))
    }

    /// Looks a variable up and returns just its value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.env
            .get(name)
            .or_else(|| self.node_attrs.get(name))
            .map(String::as_str)
    }

    /// Returns the number of distinct variable names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.env.len()
            + self
                .node_attrs
                .keys()
                .filter(|k| !self.env.contains_key(*k))
                .count()
    }

    /// Returns true if no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.env.is_empty() && self.node_attrs.is_empty()
    }

    /// Returns all variable names, sorted and deduplicated.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .env
            .keys()
            .chain(self.node_attrs.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Parses a `KEY=VALUE` assignment. The value may be empty and may contain `=`.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is blank.
pub fn parse_assignment(input: &str) -> DomainResult<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| DomainError::InvalidAssignment(input.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(DomainError::InvalidVariableName(key.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Builder for [`TaskEnv`].
#[derive(Debug, Clone, Default)]
pub struct TaskEnvBuilder {
    env: HashMap<String, String>,
    node_attrs: HashMap<String, String>,
}

impl TaskEnvBuilder {
    /// Sets a task variable.
    #[must_use]
    pub fn set_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Sets several task variables at once.
    #[must_use]
    pub fn set_envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets task variables from `KEY=VALUE` assignments.
    ///
    /// # Errors
    ///
    /// Returns an error on the first malformed assignment.
    pub fn set_assignments<I, S>(mut self, assignments: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment.as_ref())?;
            self.env.insert(key, value);
        }
        Ok(self)
    }

    /// Sets a node attribute.
    #[must_use]
    pub fn set_node_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node_attrs.insert(name.into(), value.into());
        self
    }

    /// Builds the environment.
    #[must_use]
    pub fn build(self) -> TaskEnv {
        TaskEnv {
            env: self.env,
            node_attrs: self.node_attrs,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_env() -> TaskEnv {
        TaskEnv::builder()
            .set_env("NOMAD_PORT_http", "8080")
            .set_env("shadowed", "task")
            .set_node_attr("attr.kernel.name", "linux")
            .set_node_attr("shadowed", "node")
            .build()
    }

    #[test]
    fn test_lookup_env() {
        let env = create_test_env();
        let resolved = env.lookup("NOMAD_PORT_http").unwrap();
        assert_eq!(resolved.value, "8080");
        assert_eq!(resolved.source, VariableSource::Env);
    }

    #[test]
    fn test_lookup_node_attr() {
        let env = create_test_env();
        let resolved = env.lookup("attr.kernel.name").unwrap();
        assert_eq!(resolved.value, "linux");
        assert_eq!(resolved.source, VariableSource::Node);
    }

    #[test]
    fn test_env_shadows_node() {
        let env = create_test_env();
        assert_eq!(env.value("shadowed"), Some("task"));
        assert_eq!(env.lookup("shadowed").unwrap().source, VariableSource::Env);
    }

    #[test]
    fn test_lookup_missing() {
        assert!(create_test_env().lookup("missing").is_none());
        assert!(TaskEnv::new().is_empty());
    }

    #[test]
    fn test_len_and_names() {
        let env = create_test_env();
        assert_eq!(env.len(), 3);
        assert_eq!(
            env.variable_names(),
            vec!["NOMAD_PORT_http", "attr.kernel.name", "shadowed"]
        );
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("URL=http://a?b=c").unwrap(),
            ("URL".to_string(), "http://a?b=c".to_string())
        );
        assert_eq!(
            parse_assignment("EMPTY=").unwrap(),
            ("EMPTY".to_string(), String::new())
        );
        assert_eq!(
            parse_assignment("novalue"),
            Err(DomainError::InvalidAssignment("novalue".to_string()))
        );
        assert!(matches!(
            parse_assignment(" =x"),
            Err(DomainError::InvalidVariableName(_))
        ));
    }

    #[test]
    fn test_set_assignments() {
        let env = TaskEnv::builder()
            .set_assignments(["A=1", "B=2"])
            .unwrap()
            .build();
        assert_eq!(env.value("A"), Some("1"));
        assert_eq!(env.value("B"), Some("2"));

        assert!(TaskEnv::builder().set_assignments(["bad"]).is_err());
    }
}
