//! Variable parser for `${variable}` syntax
//!
//! Parses strings to extract variable references with their positions.

use std::ops::Range;

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without `${ }`).
    pub name: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all variable references.
///
/// A reference is `${` followed by a non-empty name and a closing `}`. Names
/// may contain dots (`${attr.kernel.name}`). An unclosed `${` ends parsing;
/// the rest of the string is literal text.
///
/// # Examples
///
/// ```
/// use beacon_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("${NOMAD_TASK_NAME}-${meta.rack}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "NOMAD_TASK_NAME");
/// assert_eq!(refs[1].name, "meta.rack");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '$' || !matches!(chars.peek(), Some((_, '{'))) {
            continue;
        }
        chars.next(); // consume {

        let mut name = String::new();
        let mut found_end = false;

        for (j, ch) in chars.by_ref() {
            if ch == '}' {
                if !name.is_empty() {
                    references.push(VariableReference::new(name, i..j + 1));
                }
                found_end = true;
                break;
            }
            name.push(ch);
        }

        if !found_end {
            break;
        }
    }

    references
}

/// Returns true if the input string contains any variable references.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    !parse_variables(input).is_empty()
}

/// Extracts just the variable names from the input without full parsing info.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_variables(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}
