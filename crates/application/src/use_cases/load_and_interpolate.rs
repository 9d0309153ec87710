//! Interpolate services use case
//!
//! Loads a service list and a task environment through the repository ports,
//! interpolates the services and optionally writes the result back out.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

use beacon_domain::environment::parse_assignment;
use beacon_domain::{ServiceDescriptor, TaskEnv};
use tracing::{info, warn};

use super::interpolate::interpolate_services;
use crate::error::ApplicationResult;
use crate::ports::{EnvironmentRepository, ServiceRepository, TaskEnvironment};
use crate::variable_resolver::EnvResolver;

/// Input for the interpolate services use case.
#[derive(Debug, Clone, Default)]
pub struct InterpolateServicesInput {
    /// File holding the service descriptors.
    pub services_path: PathBuf,
    /// File holding the task environment. Without it (and without overrides)
    /// there is no environment and nothing is produced.
    pub environment_path: Option<PathBuf>,
    /// `KEY=VALUE` assignments applied on top of the loaded environment.
    pub overrides: Vec<String>,
    /// Where to write the interpolated services, if anywhere.
    pub output_path: Option<PathBuf>,
}

/// Output containing the interpolated services.
#[derive(Debug, Clone)]
pub struct InterpolateServicesOutput {
    /// The interpolated services, in input order.
    pub services: Vec<ServiceDescriptor>,
    /// Variable names that could not be resolved, sorted and deduplicated.
    pub unresolved: Vec<String>,
    /// Whether every referenced variable was resolved.
    pub is_complete: bool,
}

/// Loads, interpolates and optionally saves a service list.
pub struct InterpolateServices<S, E> {
    services: S,
    environments: E,
}

impl<S: ServiceRepository, E: EnvironmentRepository> InterpolateServices<S, E> {
    /// Creates a new `InterpolateServices` use case.
    pub const fn new(services: S, environments: E) -> Self {
        Self {
            services,
            environments,
        }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns an error if a file cannot be loaded or saved, or if an override
    /// is not a `KEY=VALUE` assignment.
    pub async fn execute(
        &self,
        input: InterpolateServicesInput,
    ) -> ApplicationResult<InterpolateServicesOutput> {
        let services = self.services.load(&input.services_path).await?;
        let env = self.load_environment(&input).await?;

        let (resolved, unresolved) = interpolate_tracked(env.map(EnvResolver::new), &services);

        if !unresolved.is_empty() {
            warn!(variables = ?unresolved, "unresolved variables left in services");
        }

        if let Some(path) = &input.output_path {
            self.services.save(path, &resolved).await?;
        }

        info!(
            loaded = services.len(),
            interpolated = resolved.len(),
            "interpolated services"
        );

        let is_complete = unresolved.is_empty();
        Ok(InterpolateServicesOutput {
            services: resolved,
            unresolved,
            is_complete,
        })
    }

    async fn load_environment(
        &self,
        input: &InterpolateServicesInput,
    ) -> ApplicationResult<Option<TaskEnv>> {
        let mut env = match &input.environment_path {
            Some(path) => Some(self.environments.load(path).await?),
            None if input.overrides.is_empty() => None,
            None => Some(TaskEnv::new()),
        };

        if let Some(env) = env.as_mut() {
            for assignment in &input.overrides {
                let (key, value) = parse_assignment(assignment)?;
                env.env.insert(key, value);
            }
        }

        Ok(env)
    }
}

/// Interpolates `services` and collects the names left unresolved.
fn interpolate_tracked(
    resolver: Option<EnvResolver>,
    services: &[ServiceDescriptor],
) -> (Vec<ServiceDescriptor>, Vec<String>) {
    let tracking = resolver.as_ref().map(TrackingEnv::new);
    let resolved = interpolate_services(tracking.as_ref(), services);

    let unresolved = tracking
        .map(|t| t.unresolved.into_inner().into_iter().collect())
        .unwrap_or_default();

    (resolved, unresolved)
}

/// Records the names the wrapped resolver could not resolve.
struct TrackingEnv<'a> {
    resolver: &'a EnvResolver,
    unresolved: RefCell<BTreeSet<String>>,
}

impl<'a> TrackingEnv<'a> {
    const fn new(resolver: &'a EnvResolver) -> Self {
        Self {
            resolver,
            unresolved: RefCell::new(BTreeSet::new()),
        }
    }
}

impl TaskEnvironment for TrackingEnv<'_> {
    fn replace_env(&self, input: &str) -> String {
        let result = self.resolver.resolve(input);
        self.unresolved.borrow_mut().extend(result.unresolved);
        result.resolved
    }

    fn parse_and_replace(&self, items: &[String]) -> Vec<String> {
        items.iter().map(|item| self.replace_env(item)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use beacon_domain::DomainError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockServiceRepository {
        files: Arc<Mutex<HashMap<PathBuf, Vec<ServiceDescriptor>>>>,
    }

    impl MockServiceRepository {
        fn with(path: &str, services: Vec<ServiceDescriptor>) -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::from([(PathBuf::from(path), services)]))),
            }
        }

        fn get(&self, path: &str) -> Option<Vec<ServiceDescriptor>> {
            self.files.lock().expect("Lock poisoned").get(Path::new(path)).cloned()
        }
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepository {
        async fn load(&self, path: &Path) -> Result<Vec<ServiceDescriptor>, RepositoryError> {
            self.files
                .lock()
                .expect("Lock poisoned")
                .get(path)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(path.to_path_buf()))
        }

        async fn save(
            &self,
            path: &Path,
            services: &[ServiceDescriptor],
        ) -> Result<(), RepositoryError> {
            self.files
                .lock()
                .expect("Lock poisoned")
                .insert(path.to_path_buf(), services.to_vec());
            Ok(())
        }
    }

    struct MockEnvironmentRepository(HashMap<PathBuf, TaskEnv>);

    #[async_trait]
    impl EnvironmentRepository for MockEnvironmentRepository {
        async fn load(&self, path: &Path) -> Result<TaskEnv, RepositoryError> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(path.to_path_buf()))
        }
    }

    fn environments() -> MockEnvironmentRepository {
        MockEnvironmentRepository(HashMap::from([(
            PathBuf::from("env.json"),
            TaskEnv::builder()
                .set_env("NOMAD_TASK_NAME", "web")
                .set_env("VERSION", "v1")
                .build(),
        )]))
    }

    fn services() -> Vec<ServiceDescriptor> {
        vec![
            ServiceDescriptor::new("${NOMAD_TASK_NAME}")
                .with_tag("${VERSION}")
                .with_tag("${MISSING}")
                .with_meta("${IGNORED_KEY}", "x"),
        ]
    }

    #[tokio::test]
    async fn test_execute_interpolates() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let output = use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                environment_path: Some("env.json".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.services[0].name, "web");
        assert_eq!(output.services[0].tags, vec!["v1", "${MISSING}"]);
        assert_eq!(output.unresolved, vec!["MISSING"]);
        assert!(!output.is_complete);
    }

    #[tokio::test]
    async fn test_execute_without_environment_produces_nothing() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let output = use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(output.services.is_empty());
        assert!(output.is_complete);
    }

    #[tokio::test]
    async fn test_overrides_shadow_loaded_environment() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let output = use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                environment_path: Some("env.json".into()),
                overrides: vec!["VERSION=v9".into(), "MISSING=found".into()],
                output_path: None,
            })
            .await
            .unwrap();

        assert_eq!(output.services[0].tags, vec!["v9", "found"]);
        assert!(output.is_complete);
    }

    #[tokio::test]
    async fn test_overrides_without_environment_file() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let output = use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                overrides: vec!["NOMAD_TASK_NAME=api".into()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.services[0].name, "api");
        assert_eq!(output.unresolved, vec!["MISSING", "VERSION"]);
    }

    #[tokio::test]
    async fn test_invalid_override() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let result = use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                overrides: vec!["nope".into()],
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidAssignment(_)))
        ));
    }

    #[tokio::test]
    async fn test_saves_output() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        use_case
            .execute(InterpolateServicesInput {
                services_path: "services.json".into(),
                environment_path: Some("env.json".into()),
                overrides: Vec::new(),
                output_path: Some("out.json".into()),
            })
            .await
            .unwrap();

        let saved = repo.get("out.json").unwrap();
        assert_eq!(saved[0].name, "web");
        // the input file is untouched
        assert_eq!(repo.get("services.json").unwrap(), services());
    }

    #[tokio::test]
    async fn test_missing_services_file() {
        let repo = MockServiceRepository::with("services.json", services());
        let use_case = InterpolateServices::new(repo.clone(), environments());

        let result = use_case
            .execute(InterpolateServicesInput {
                services_path: "other.json".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
