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

//! The seam between the pipeline and whatever turns shader source into a
//! backend binary.

mod request;
mod shaderc;

pub use request::CompileRequest;
pub use shaderc::ShadercCompiler;

use shaderpack_core::{BackendTarget, ShaderStage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while compiling a single stage for a single target.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The shader source file does not exist.
    #[error("shader source '{}' does not exist", path.display())]
    SourceNotFound {
        /// The missing file.
        path: PathBuf,
    },
    /// The compiler executable could not be started.
    #[error("failed to launch shader compiler '{}': {source}", program.display())]
    Spawn {
        /// The executable that was attempted.
        program: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
    /// The compiler ran and reported failure.
    #[error("shader compiler exited with {}: {diagnostics}", describe_exit(*code))]
    Failed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Everything the compiler printed.
        diagnostics: String,
    },
    /// The compiler reported success but wrote no output file.
    #[error("shader compiler produced no output: {diagnostics}")]
    MissingOutput {
        /// Everything the compiler printed.
        diagnostics: String,
    },
    /// Scratch directory or output file I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CompileError {
    /// True for failures tied to one (target, stage) pair, which a partial
    /// build may skip. A missing source, an unlaunchable compiler or a
    /// scratch I/O failure would fail every target the same way.
    pub fn is_target_specific(&self) -> bool {
        matches!(
            self,
            CompileError::Failed { .. } | CompileError::MissingOutput { .. }
        )
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code".to_string(),
    }
}

/// The files that make up one shader pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Vertex stage source.
    pub vertex: PathBuf,
    /// Fragment stage source.
    pub fragment: PathBuf,
    /// Directory searched for `#include`s.
    pub include_dir: Option<PathBuf>,
    /// Path to the `varying.def.sc` shared by both stages.
    pub varying_def: Option<PathBuf>,
}

impl ShaderSource {
    /// Creates a source with no include directory or varying definitions.
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
            include_dir: None,
            varying_def: None,
        }
    }

    /// Sets the include directory.
    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dir = Some(dir.into());
        self
    }

    /// Sets the varying definition file.
    pub fn with_varying_def(mut self, path: impl Into<PathBuf>) -> Self {
        self.varying_def = Some(path.into());
        self
    }

    /// The source file for `stage`.
    pub fn path(&self, stage: ShaderStage) -> &Path {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// Checks that both stage sources exist on disk.
    pub fn validate(&self) -> Result<(), CompileError> {
        for stage in ShaderStage::ALL {
            let path = self.path(stage);
            if !path.is_file() {
                return Err(CompileError::SourceNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

/// Anything able to compile one stage of a [`ShaderSource`] for one backend.
pub trait ShaderCompiler {
    /// Compiles `stage` of `source` for `target` and returns the binary blob.
    fn compile(
        &self,
        source: &ShaderSource,
        stage: ShaderStage,
        target: &BackendTarget,
    ) -> Result<Vec<u8>, CompileError>;
}
