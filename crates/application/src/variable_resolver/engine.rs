//! Variable resolution engine
//!
//! Resolves `${variable}` references against a task environment.

use beacon_domain::{ResolvedVariable, TaskEnv};

use super::parser::parse_variables;
use crate::ports::TaskEnvironment;

/// Result of variable resolution for a string.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    /// The resolved string with all known variables substituted.
    pub resolved: String,

    /// Variables that were successfully resolved.
    pub resolved_variables: Vec<ResolvedVariable>,

    /// Variable names that could not be resolved.
    pub unresolved: Vec<String>,

    /// Whether all variables were successfully resolved.
    pub is_complete: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no variables.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved variables.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved_variables.len()
    }

    /// Returns the count of unresolved variables.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// Resolves `${variable}` references against a [`TaskEnv`].
///
/// Unknown references are kept verbatim, so resolution never fails.
#[derive(Debug, Clone, Default)]
pub struct EnvResolver {
    env: TaskEnv,
}

impl EnvResolver {
    /// Creates a new resolver over the given environment.
    #[must_use]
    pub const fn new(env: TaskEnv) -> Self {
        Self { env }
    }

    /// Returns the underlying environment.
    #[must_use]
    pub const fn env(&self) -> &TaskEnv {
        &self.env
    }

    /// Replaces the underlying environment.
    pub fn set_env(&mut self, env: TaskEnv) {
        self.env = env;
    }

    /// Resolves all variables in the input string.
    #[must_use]
    pub fn resolve(&self, input: &str) -> ResolutionResult {
        let references = parse_variables(input);

        if references.is_empty() {
            return ResolutionResult::no_variables(input);
        }

        let mut resolved_variables = Vec::new();
        let mut unresolved = Vec::new();
        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for var_ref in &references {
            result.push_str(&input[last_end..var_ref.span.start]);

            if let Some(resolved) = self.env.lookup(&var_ref.name) {
                result.push_str(&resolved.value);
                resolved_variables.push(resolved);
            } else {
                // Keep the original ${variable} for unresolved
                result.push_str(&input[var_ref.span.clone()]);
                unresolved.push(var_ref.name.clone());
            }

            last_end = var_ref.span.end;
        }

        result.push_str(&input[last_end..]);

        let is_complete = unresolved.is_empty();
        ResolutionResult {
            resolved: result,
            resolved_variables,
            unresolved,
            is_complete,
        }
    }

    /// Returns the names referenced by `input` that this environment cannot resolve.
    #[must_use]
    pub fn find_unresolved(&self, input: &str) -> Vec<String> {
        parse_variables(input)
            .into_iter()
            .filter(|r| self.env.lookup(&r.name).is_none())
            .map(|r| r.name)
            .collect()
    }
}

impl TaskEnvironment for EnvResolver {
    fn replace_env(&self, input: &str) -> String {
        self.resolve(input).resolved
    }

    // Element-wise; no composite expansion.
    fn parse_and_replace(&self, items: &[String]) -> Vec<String> {
        items.iter().map(|item| self.replace_env(item)).collect()
    }
}

impl From<TaskEnv> for EnvResolver {
    fn from(env: TaskEnv) -> Self {
        Self::new(env)
    }
}
