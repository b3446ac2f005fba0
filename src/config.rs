use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::BenchError;

pub const DEFAULT_BINARY: &str = "target/release/acme-rust-template";
pub const DEFAULT_OUTPUT: &str = "benches/benchmark_results.json";
pub const DEFAULT_NAME: &str = "Rust Execution";
pub const DEFAULT_RUNS: usize = 5;
pub const WORKSPACE_CONFIG: &str = "bench.toml";

/// Fully resolved settings for one runner invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub workspace_root: PathBuf,
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub build_command: Vec<String>,
    pub name: String,
    pub runs: usize,
    pub output: PathBuf,
}

/// Optional settings, as read from a TOML file or the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub binary: Option<PathBuf>,
    pub args: Option<Vec<String>>,
    pub build_command: Option<Vec<String>>,
    pub name: Option<String>,
    pub runs: Option<usize>,
    pub output: Option<PathBuf>,
}

impl Overrides {
    /// Fields set in `other` win over fields set in `self`.
    pub fn merge(self, other: Overrides) -> Overrides {
        Overrides {
            binary: other.binary.or(self.binary),
            args: other.args.or(self.args),
            build_command: other.build_command.or(self.build_command),
            name: other.name.or(self.name),
            runs: other.runs.or(self.runs),
            output: other.output.or(self.output),
        }
    }
}

impl RunnerConfig {
    pub fn defaults(workspace_root: PathBuf) -> Self {
        RunnerConfig {
            workspace_root,
            binary: PathBuf::from(DEFAULT_BINARY),
            args: Vec::new(),
            build_command: vec![
                "cargo".to_string(),
                "build".to_string(),
                "--release".to_string(),
            ],
            name: DEFAULT_NAME.to_string(),
            runs: DEFAULT_RUNS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Layer a config file (explicit, workspace-local, or per-user) and the
    /// command-line overrides on top of the defaults.
    pub fn resolve(
        workspace_root: PathBuf,
        config_file: Option<&Path>,
        cli: Overrides,
    ) -> Result<Self, BenchError> {
        let file = match config_file {
            Some(path) => load_overrides(path)?,
            None => match find_config_file(&workspace_root) {
                Some(path) => load_overrides(&path)?,
                None => Overrides::default(),
            },
        };
        let layered = file.merge(cli);

        let mut config = RunnerConfig::defaults(workspace_root);
        if let Some(binary) = layered.binary {
            config.binary = binary;
        }
        if let Some(args) = layered.args {
            config.args = args;
        }
        if let Some(build_command) = layered.build_command {
            config.build_command = build_command;
        }
        if let Some(name) = layered.name {
            config.name = name;
        }
        if let Some(runs) = layered.runs {
            config.runs = runs;
        }
        if let Some(output) = layered.output {
            config.output = output;
        }

        if config.runs == 0 {
            return Err(BenchError::InvalidRuns);
        }
        Ok(config)
    }

    /// Target executable; relative paths are taken from the workspace root.
    pub fn binary_path(&self) -> PathBuf {
        self.workspace_root.join(&self.binary)
    }

    pub fn output_path(&self) -> PathBuf {
        self.workspace_root.join(&self.output)
    }
}

/// `<workspace>/bench.toml`, falling back to the per-user config directory.
pub fn find_config_file(workspace_root: &Path) -> Option<PathBuf> {
    let local = workspace_root.join(WORKSPACE_CONFIG);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("acme-bench").join("config.toml");
    user.is_file().then_some(user)
}

pub fn load_overrides(path: &Path) -> Result<Overrides, BenchError> {
    let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| BenchError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_workspace_layout() {
        let config = RunnerConfig::defaults(PathBuf::from("/work"));
        assert_eq!(
            config.binary_path(),
            PathBuf::from("/work/target/release/acme-rust-template")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/work/benches/benchmark_results.json")
        );
        assert_eq!(config.runs, 5);
        assert_eq!(config.name, "Rust Execution");
        assert_eq!(config.build_command, vec!["cargo", "build", "--release"]);
    }

    #[test]
    fn absolute_binary_ignores_workspace() {
        let mut config = RunnerConfig::defaults(PathBuf::from("/work"));
        config.binary = PathBuf::from("/usr/bin/true");
        assert_eq!(config.binary_path(), PathBuf::from("/usr/bin/true"));
    }

    #[test]
    fn explicit_config_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "binary = \"bin/app\"\nargs = [\"--quiet\"]\nruns = 9\nname = \"App\""
        )
        .unwrap();

        let config =
            RunnerConfig::resolve(PathBuf::from("/work"), Some(file.path()), Overrides::default())
                .unwrap();
        assert_eq!(config.binary_path(), PathBuf::from("/work/bin/app"));
        assert_eq!(config.args, vec!["--quiet"]);
        assert_eq!(config.runs, 9);
        assert_eq!(config.name, "App");
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn cli_overrides_beat_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "runs = 9\nname = \"From file\"").unwrap();

        let cli = Overrides {
            runs: Some(3),
            ..Overrides::default()
        };
        let config =
            RunnerConfig::resolve(PathBuf::from("/work"), Some(file.path()), cli).unwrap();
        assert_eq!(config.runs, 3);
        assert_eq!(config.name, "From file");
    }

    #[test]
    fn workspace_config_file_is_discovered() {
        let tmp = assert_fs::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(WORKSPACE_CONFIG), "runs = 7\n").unwrap();

        let config =
            RunnerConfig::resolve(tmp.path().to_path_buf(), None, Overrides::default()).unwrap();
        assert_eq!(config.runs, 7);
    }

    #[test]
    fn zero_runs_rejected() {
        let cli = Overrides {
            runs: Some(0),
            ..Overrides::default()
        };
        let tmp = assert_fs::TempDir::new().unwrap();
        let err = RunnerConfig::resolve(tmp.path().to_path_buf(), None, cli).unwrap_err();
        assert!(matches!(err, BenchError::InvalidRuns));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let err = RunnerConfig::resolve(
            tmp.path().to_path_buf(),
            Some(&tmp.path().join("nope.toml")),
            Overrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BenchError::ConfigRead { .. }));
    }

    #[test]
    fn unknown_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "repetitions = 3").unwrap();
        let err = load_overrides(file.path()).unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse { .. }));
    }
}
