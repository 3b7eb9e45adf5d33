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

// Cross-compiles shader pairs for every supported graphics backend.
// Run with: shaderpack <command>

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::compile::CompileArgs;
use shaderpack_io::ShadercCompiler;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shaderpack", version, about)]
struct Cli {
    /// Shader compiler executable (default: `shaderc` on PATH, or the manifest's).
    #[arg(long, global = true)]
    shaderc: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile one vertex/fragment pair into a record.
    Compile(CompileArgs),
    /// Compile every shader listed in a manifest.
    Build {
        /// Manifest file.
        #[arg(long, default_value = "Shaders.toml")]
        manifest: PathBuf,
    },
    /// Print the contents of a compiled record.
    Inspect {
        /// Record written by `compile` or `build`.
        file: PathBuf,
    },
    /// List the backend targets and their profiles.
    Targets,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Compile(args) => {
            let compiler = cli
                .shaderc
                .as_ref()
                .map(ShadercCompiler::new)
                .unwrap_or_default();
            commands::compile::compile(&compiler, args)
        }
        Commands::Build { manifest } => commands::build::build(manifest, cli.shaderc.as_ref()),
        Commands::Inspect { file } => commands::inspect::inspect(file),
        Commands::Targets => {
            commands::targets::targets();
            Ok(())
        }
    }
}
