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

use crate::commands::manifest::{load_manifest, ShaderEntry, ShaderManifest};
use crate::helpers::*;
use anyhow::Result;
use log::debug;
use shaderpack_io::{
    compile_shader, resolve_targets, write_compiled, CompileOptions, ShaderCompiler,
    ShadercCompiler,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Compiles every shader listed in the manifest at `manifest_path`.
///
/// A failing entry does not stop the others; the command fails at the end
/// if any entry did.
pub fn build(manifest_path: &Path, shaderc_override: Option<&PathBuf>) -> Result<()> {
    print_task_start("Building Shaders", HAMMER, BLUE);

    let manifest = load_manifest(manifest_path)?;
    if manifest.shaders.is_empty() {
        print_success("No shaders listed. Nothing to build.");
        return Ok(());
    }

    let program = shaderc_override.unwrap_or(&manifest.shaderc);
    let compiler = ShadercCompiler::new(program);
    println!(
        "{}🔎 Found:{} {} shader(s), compiler '{}'",
        BOLD,
        RESET,
        manifest.shaders.len(),
        compiler.program().display()
    );

    let start = Instant::now();
    let mut failed = Vec::new();
    for entry in &manifest.shaders {
        if let Err(err) = build_entry(&compiler, &manifest, entry) {
            debug!("{:?}", err);
            print_error(&format!("{}: {:#}", entry.name, err));
            failed.push(entry.name.as_str());
        }
    }

    let built = manifest.shaders.len() - failed.len();
    println!(
        "{}{}Built {}/{} shader(s) in {:.2}s{}",
        BOLD,
        CYAN,
        built,
        manifest.shaders.len(),
        start.elapsed().as_secs_f64(),
        RESET
    );

    if !failed.is_empty() {
        anyhow::bail!("Failed to build: {}", failed.join(", "));
    }
    print_success("Shader pipeline finished successfully.");
    Ok(())
}

fn build_entry<C: ShaderCompiler + ?Sized>(
    compiler: &C,
    manifest: &ShaderManifest,
    entry: &ShaderEntry,
) -> Result<PathBuf> {
    let targets = resolve_targets(&entry.targets)?;
    let options = CompileOptions {
        allow_partial: manifest.allow_partial,
    };
    let compiled = compile_shader(compiler, &entry.name, &entry.source(), &targets, &options)?;

    let out = manifest.output_path(entry);
    write_compiled(&out, &compiled)?;

    let size: usize = shaderpack_core::ShaderStage::ALL
        .iter()
        .flat_map(|stage| compiled.iter_stage(*stage))
        .map(|(_, blob)| blob.len())
        .sum();
    println!(
        "{}{} {} {} {}-> '{}' ({}, uuid {}){}",
        BOLD,
        GREEN,
        PACKAGE,
        entry.name,
        RESET,
        out.display(),
        format_size(size),
        compiled.uuid(),
        RESET
    );
    Ok(out)
}
