//! Task environment port
//!
//! The interpolation engine never parses variable syntax itself. It hands every
//! user-authored string to an implementation of this trait.

/// Substitution capabilities of a task environment.
///
/// Both operations are total: references that cannot be resolved are kept as
/// literal text, so there is no error channel.
pub trait TaskEnvironment {
    /// Replaces variable references in a single string.
    fn replace_env(&self, input: &str) -> String;

    /// Replaces variable references across a list.
    ///
    /// Implementations may expand one input entry into several output entries,
    /// so the result length can differ from the input length. Use this for
    /// every field that is semantically a list (tags, arguments, hosts).
    fn parse_and_replace(&self, items: &[String]) -> Vec<String>;
}

impl<T: TaskEnvironment + ?Sized> TaskEnvironment for &T {
    fn replace_env(&self, input: &str) -> String {
        (**self).replace_env(input)
    }

    fn parse_and_replace(&self, items: &[String]) -> Vec<String> {
        (**self).parse_and_replace(items)
    }
}
