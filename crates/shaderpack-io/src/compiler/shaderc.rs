// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{CompileError, CompileRequest, ShaderCompiler, ShaderSource};
use log::{debug, trace};
use shaderpack_core::{BackendTarget, ShaderStage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

const OUTPUT_FILE_NAME: &str = "shader.bin";

/// Runs bgfx's `shaderc` executable as a child process.
///
/// Every invocation writes into its own scratch directory, which is removed
/// when the call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct ShadercCompiler {
    program: PathBuf,
}

impl ShadercCompiler {
    /// Uses the executable at `program` (looked up on `PATH` if bare).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this compiler runs.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ShadercCompiler {
    fn default() -> Self {
        Self::new("shaderc")
    }
}

impl ShaderCompiler for ShadercCompiler {
    fn compile(
        &self,
        source: &ShaderSource,
        stage: ShaderStage,
        target: &BackendTarget,
    ) -> Result<Vec<u8>, CompileError> {
        let scratch = tempfile::Builder::new().prefix("shaderpack-").tempdir()?;
        let output_path = scratch.path().join(OUTPUT_FILE_NAME);

        let args = CompileRequest::new(source.path(stage), &output_path, target.platform, stage)
            .include_dir(source.include_dir.as_deref())
            .varying_def(source.varying_def.as_deref())
            .profile(Some(target.profile(stage)))
            .to_args();
        trace!("{} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|err| CompileError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;
        let diagnostics = collect_diagnostics(&output.stdout, &output.stderr);

        if !output.status.success() {
            return Err(CompileError::Failed {
                code: output.status.code(),
                diagnostics,
            });
        }

        let blob = match fs::read(&output_path) {
            Ok(blob) => blob,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CompileError::MissingOutput { diagnostics });
            }
            Err(err) => return Err(err.into()),
        };

        if !diagnostics.is_empty() {
            debug!(
                "shaderc output for {} ({} {}): {}",
                source.path(stage).display(),
                target.name,
                stage,
                diagnostics
            );
        }
        Ok(blob)
    }
}

/// Joins the compiler's stdout and stderr into one trimmed message.
fn collect_diagnostics(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_skip_empty_streams() {
        assert_eq!(collect_diagnostics(b"", b""), "");
        assert_eq!(collect_diagnostics(b"  \n", b"error X3000\n"), "error X3000");
        assert_eq!(
            collect_diagnostics(b"warning: unused\n", b"error: bad\n"),
            "warning: unused\nerror: bad"
        );
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let vertex = dir.path().join("vs.sc");
        std::fs::write(&vertex, "").unwrap();
        let source = ShaderSource::new(&vertex, &vertex);
        let compiler = ShadercCompiler::new(dir.path().join("no-such-shaderc"));

        let result = compiler.compile(
            &source,
            ShaderStage::Vertex,
            &shaderpack_core::DEFAULT_TARGETS[0],
        );
        assert!(matches!(result, Err(CompileError::Spawn { .. })));
    }
}
