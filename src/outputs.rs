//! Output file conventions for unit tests: paths are numbered per
//! invocation in ascending order at the leaves of the directory structure,
//! so running tests twice without cleaning doesn't fail.
//!
//! The layout is `target/test-outputs/<case>/<method>/<prefix><NN><postfix>`
//! with `NN` a 2-digit run number per method.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::errors::{NpError, Result};
use crate::generator::{ensure_dir, PathGenerator};

pub const TARGET: &str = "target";
pub const TEST_OUTPUTS: &str = "test-outputs";

pub const RUN_PREFIX: &str = "RUN-";
// max 99 invocations w/o cleaning (deliberate!)
pub const RUN_TOKEN_WIDTH: u32 = 2;

/// Root for per-case output directories, conventionally
/// `<context>/target/test-outputs`. Created eagerly on construction.
#[derive(Debug, Clone)]
pub struct TestOutputs {
    root: PathBuf,
}

impl TestOutputs {
    /// Roots the convention at the current working directory.
    pub fn new() -> Result<Self> {
        Self::in_context(Path::new("."))
    }

    /// `context` must be an existing directory.
    pub fn in_context(context: &Path) -> Result<Self> {
        if !context.is_dir() {
            return Err(NpError::NotADirectory { path: context.to_path_buf() });
        }
        let root = context.join(TARGET).join(TEST_OUTPUTS);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output directory for a named test case. Pure join; not created.
    pub fn output_dir(&self, case: &str) -> PathBuf {
        self.root.join(case)
    }
}

/// Per-test-case output paths: a dedicated subdirectory per test method,
/// and numbered run paths inside it.
#[derive(Debug, Clone)]
pub struct CaseOutputs {
    dir: PathBuf,
}

impl CaseOutputs {
    pub fn new(case: &str) -> Result<Self> {
        Self::in_context(Path::new("."), case)
    }

    pub fn in_context(context: &Path, case: &str) -> Result<Self> {
        let dir = TestOutputs::in_context(context)?.output_dir(case);
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Careful, returns the same directory across invocations.
    pub fn method_dir(&self, method: &str) -> Result<PathBuf> {
        let dir = self.dir.join(method);
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// A new `RUN-NN` path for this run of `method`. The path doesn't yet
    /// exist; it can be turned into a directory or a regular file.
    pub fn run_path(&self, method: &str) -> Result<PathBuf> {
        self.run_path_with(method, RUN_PREFIX, "")
    }

    pub fn run_path_with(&self, method: &str, prefix: &str, postfix: &str) -> Result<PathBuf> {
        let dir = self.method_dir(method)?;
        let cfg = GeneratorConfig {
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
            token_width: RUN_TOKEN_WIDTH,
        };
        PathGenerator::create(&dir, cfg)?.next_path()
    }
}

/// Name of the test currently running, taken from the test thread's name.
/// Use it as the `method` label for [`CaseOutputs`] instead of hardcoding
/// the function name. Returns `None` off the test harness (e.g. custom
/// spawned threads).
pub fn current_test_name() -> Option<String> {
    let thread = std::thread::current();
    let name = thread.name()?;
    Some(name.rsplit("::").next().unwrap_or(name).to_string())
}

/// Whether the given environment variable opts a long-running test in.
/// Shorthand for [`check_enabled_for`] without a skip hint.
pub fn check_enabled(var: &str) -> bool {
    check_enabled_for(var, None)
}

/// Whether `var` is set to `true` or `1`. When it isn't and a method label
/// is given, logs how to enable the test before returning false.
pub fn check_enabled_for(var: &str, method: Option<&str>) -> bool {
    let enabled = std::env::var(var)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);
    if !enabled {
        if let Some(method) = method {
            tracing::info!("skipping {method}, run with {var}=true to activate");
        }
    }
    enabled
}
