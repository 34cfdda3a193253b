//! Post-generation actions: dependency installation and git initialization.
//!
//! Both run as detached tokio tasks. Their outcome is only logged and never
//! becomes part of a [`GenerationResult`](crate::generate::GenerationResult).

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::request::GenerationRequest;

// External imports (alphabetized)
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Installs packages into the generated project
pub trait DependencyInstaller: Send + Sync {
    fn install(&self, packages: Vec<String>) -> JoinHandle<()>;
}

/// Initializes version control for the generated project
pub trait VersionControlInitializer: Send + Sync {
    fn init(&self) -> JoinHandle<()>;
}

/// Runs `<program> install <packages...>` in the project root
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    root: PathBuf,
}

impl NpmInstaller {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_program("npm", root)
    }

    /// Use another package manager binary, e.g. `pnpm`
    pub fn with_program(program: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            root: root.into(),
        }
    }
}

impl DependencyInstaller for NpmInstaller {
    fn install(&self, packages: Vec<String>) -> JoinHandle<()> {
        log::info!("Installing dependencies: {}", packages.join(" "));
        let mut command = Command::new(&self.program);
        command.arg("install").args(&packages).current_dir(&self.root);
        tokio::spawn(async move {
            if run_logged("dependency install", command).await {
                log::info!("Dependencies installed");
            }
        })
    }
}

/// Runs `git init`, `git add .` and an initial commit in the project root
#[derive(Debug, Clone)]
pub struct GitInitializer {
    root: PathBuf,
}

impl GitInitializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn git(root: &Path, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command.args(args).current_dir(root);
        command
    }
}

impl VersionControlInitializer for GitInitializer {
    fn init(&self) -> JoinHandle<()> {
        log::info!("Initializing git repository in {}", self.root.display());
        let steps = [
            Self::git(&self.root, &["init"]),
            Self::git(&self.root, &["add", "."]),
            Self::git(&self.root, &["commit", "-m", "Initial commit"]),
        ];
        tokio::spawn(async move {
            for step in steps {
                if !run_logged("git initialization", step).await {
                    return;
                }
            }
            log::info!("Git repository initialized");
        })
    }
}

/// Run a command to completion and log its output. Returns success.
async fn run_logged(label: &str, mut command: Command) -> bool {
    match command.output().await {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.trim().is_empty() {
                log::info!("{}", stdout.trim_end());
            }
            true
        }
        Ok(output) => {
            log::error!(
                "Error during {} (status {}): {}",
                label,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
            false
        }
        Err(e) => {
            log::error!("Failed to start {}: {}", label, e);
            false
        }
    }
}

/// Collaborators invoked after materialization
#[derive(Default)]
pub struct PostActions {
    installer: Option<Box<dyn DependencyInstaller>>,
    vcs: Option<Box<dyn VersionControlInitializer>>,
}

impl PostActions {
    /// No collaborators; requested actions are skipped with a log line
    pub fn none() -> Self {
        Self::default()
    }

    /// npm and git, both running in `root`
    pub fn system(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::none()
            .with_installer(NpmInstaller::new(root.clone()))
            .with_vcs(GitInitializer::new(root))
    }

    pub fn with_installer(mut self, installer: impl DependencyInstaller + 'static) -> Self {
        self.installer = Some(Box::new(installer));
        self
    }

    pub fn with_vcs(mut self, vcs: impl VersionControlInitializer + 'static) -> Self {
        self.vcs = Some(Box::new(vcs));
        self
    }

    /// Start the actions the request asks for without waiting on them.
    pub fn dispatch(&self, request: &GenerationRequest) -> PendingActions {
        let mut handles = Vec::new();

        if request.install_dependencies {
            match &self.installer {
                Some(installer) => handles.push(installer.install(request.dependencies())),
                None => log::warn!("Dependency installation requested but no installer configured"),
            }
        }

        if request.init_version_control {
            match &self.vcs {
                Some(vcs) => handles.push(vcs.init()),
                None => log::warn!("Git initialization requested but no initializer configured"),
            }
        }

        PendingActions { handles }
    }
}

/// Handles to actions started by [`PostActions::dispatch`]
#[derive(Debug, Default)]
pub struct PendingActions {
    handles: Vec<JoinHandle<()>>,
}

impl PendingActions {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every action to finish. Panicked tasks are logged.
    pub async fn wait(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                log::error!("Post-generation action failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingInstaller {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
    }

    impl DependencyInstaller for RecordingInstaller {
        fn install(&self, packages: Vec<String>) -> JoinHandle<()> {
            self.calls.lock().unwrap().push(packages);
            tokio::spawn(async {})
        }
    }

    #[derive(Clone, Default)]
    struct RecordingVcs {
        calls: Arc<Mutex<usize>>,
    }

    impl VersionControlInitializer for RecordingVcs {
        fn init(&self) -> JoinHandle<()> {
            *self.calls.lock().unwrap() += 1;
            tokio::spawn(async {})
        }
    }

    #[tokio::test]
    async fn test_dispatch_only_requested_actions() {
        let installer = RecordingInstaller::default();
        let vcs = RecordingVcs::default();
        let actions = PostActions::none()
            .with_installer(installer.clone())
            .with_vcs(vcs.clone());

        let request = GenerationRequest {
            install_dependencies: true,
            ..Default::default()
        };
        let pending = actions.dispatch(&request);
        assert_eq!(pending.len(), 1);
        pending.wait().await;

        assert_eq!(
            *installer.calls.lock().unwrap(),
            vec![vec!["react".to_string(), "next".to_string()]]
        );
        assert_eq!(*vcs.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_collaborators_are_skipped() {
        let request = GenerationRequest {
            install_dependencies: true,
            init_version_control: true,
            ..Default::default()
        };
        assert!(PostActions::none().dispatch(&request).is_empty());
    }

    #[tokio::test]
    async fn test_failed_install_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let installer = NpmInstaller::with_program("nextkit-no-such-binary", dir.path());
        let handle = installer.install(vec!["react".to_string()]);
        assert!(handle.await.is_ok());
    }
}
