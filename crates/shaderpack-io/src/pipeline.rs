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

//! Cross-compiles a shader pair for a list of backend targets.

use crate::compiler::{ShaderCompiler, ShaderSource};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use shaderpack_core::shader::find_target;
use shaderpack_core::{BackendTarget, CompiledShader, ShaderStage, DEFAULT_TARGETS};
use std::time::Instant;
use thiserror::Error;

/// Knobs for [`compile_shader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Keep going when a stage fails for one target; the failed entry is
    /// left out of the record instead of aborting the whole pair.
    pub allow_partial: bool,
}

/// Compiles both stages of `source` for every target in `targets`.
///
/// Targets are processed in order, vertex before fragment, and each blob is
/// stored under the target's name.
///
/// # Errors
/// Fails if a source file is missing, or on the first compiler failure
/// unless [`CompileOptions::allow_partial`] is set. Failures that are not
/// specific to one target (see [`crate::CompileError::is_target_specific`]) are
/// fatal in both modes, and a partial build that produced nothing fails.
pub fn compile_shader<C: ShaderCompiler + ?Sized>(
    compiler: &C,
    name: &str,
    source: &ShaderSource,
    targets: &[BackendTarget],
    options: &CompileOptions,
) -> Result<CompiledShader> {
    source.validate()?;

    let start = Instant::now();
    let mut compiled = CompiledShader::new(name);
    let mut failures = 0usize;

    info!("Compiling shader '{}' for {} target(s)", name, targets.len());

    for target in targets {
        for stage in ShaderStage::ALL {
            match compiler.compile(source, stage, target) {
                Ok(blob) => {
                    debug!(
                        "'{}' {} stage for {}: {} bytes",
                        name,
                        stage,
                        target.name,
                        blob.len()
                    );
                    compiled.insert(stage, target.name, blob);
                }
                Err(err) if options.allow_partial && err.is_target_specific() => {
                    warn!(
                        "Skipping {} stage of '{}' for {}: {}",
                        stage, name, target.name, err
                    );
                    failures += 1;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!(
                            "Failed to compile {} stage of '{}' for {} ({}, {})",
                            stage,
                            name,
                            target.name,
                            target.platform,
                            target.profile(stage)
                        )
                    });
                }
            }
        }
    }

    if failures > 0 && compiled.is_empty() {
        anyhow::bail!(
            "Every stage of '{}' failed to compile ({} failure(s))",
            name,
            failures
        );
    }
    if failures > 0 {
        warn!(
            "Shader '{}' compiled with {} failed stage(s)",
            name, failures
        );
    }
    info!(
        "Compiled shader '{}' in {:.2}s",
        name,
        start.elapsed().as_secs_f64()
    );

    Ok(compiled)
}

/// A target name that is not part of [`DEFAULT_TARGETS`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown backend target '{0}'")]
pub struct UnknownTarget(pub String);

/// Maps target names to entries of [`DEFAULT_TARGETS`]; an empty list selects all of them.
pub fn resolve_targets<S: AsRef<str>>(names: &[S]) -> Result<Vec<BackendTarget>, UnknownTarget> {
    if names.is_empty() {
        return Ok(DEFAULT_TARGETS.to_vec());
    }
    names
        .iter()
        .map(|name| {
            find_target(name.as_ref())
                .copied()
                .ok_or_else(|| UnknownTarget(name.as_ref().to_string()))
        })
        .collect()
}
