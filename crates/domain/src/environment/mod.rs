//! Task environment domain types

mod task_env;
mod variable;

pub use task_env::{TaskEnv, TaskEnvBuilder, parse_assignment};
pub use variable::{ResolvedVariable, VariableSource};
