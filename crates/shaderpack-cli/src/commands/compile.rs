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

use crate::helpers::*;
use anyhow::Result;
use clap::Args;
use shaderpack_io::{
    compile_shader, resolve_targets, write_compiled, CompileOptions, ShaderCompiler,
    ShaderSource,
};
use std::path::PathBuf;

/// Arguments of `shaderpack compile`.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Vertex shader source.
    #[arg(long)]
    pub vertex: PathBuf,
    /// Fragment shader source.
    #[arg(long)]
    pub fragment: PathBuf,
    /// Include search path handed to the compiler.
    #[arg(long)]
    pub include: Option<PathBuf>,
    /// Path to varying.def.sc.
    #[arg(long)]
    pub varyingdef: Option<PathBuf>,
    /// Where to write the compiled record.
    #[arg(long, short)]
    pub out: PathBuf,
    /// Name stored in the record; defaults to the output file stem.
    #[arg(long)]
    pub name: Option<String>,
    /// Restrict to these backends (repeatable). Default: all.
    #[arg(long = "target")]
    pub targets: Vec<String>,
    /// Skip failed backends instead of aborting.
    #[arg(long)]
    pub allow_partial: bool,
}

impl CompileArgs {
    fn shader_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.out
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "shader".to_string())
        })
    }

    fn source(&self) -> ShaderSource {
        ShaderSource {
            vertex: self.vertex.clone(),
            fragment: self.fragment.clone(),
            include_dir: self.include.clone(),
            varying_def: self.varyingdef.clone(),
        }
    }
}

pub fn compile<C: ShaderCompiler + ?Sized>(compiler: &C, args: &CompileArgs) -> Result<()> {
    print_task_start("Compiling Shader", GEAR, MAGENTA);

    let name = args.shader_name();
    let targets = resolve_targets(&args.targets)?;
    let options = CompileOptions {
        allow_partial: args.allow_partial,
    };

    let compiled = compile_shader(compiler, &name, &args.source(), &targets, &options)?;
    write_compiled(&args.out, &compiled)?;

    let incomplete: Vec<_> = targets
        .iter()
        .filter(|t| !compiled.is_complete(t.name))
        .map(|t| t.name)
        .collect();
    if !incomplete.is_empty() {
        print_warning(&format!("Incomplete backends: {}", incomplete.join(", ")));
    }

    print_success(&format!(
        "Wrote '{}' ({} backends) to '{}'",
        name,
        compiled.platforms().len(),
        args.out.display()
    ));
    Ok(())
}
