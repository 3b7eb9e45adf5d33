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
use shaderpack_core::CompiledShader;
use shaderpack_io::read_compiled;
use std::path::Path;

pub fn inspect(path: &Path) -> Result<()> {
    print_task_start("Inspecting Shader", MAGNIFIER, CYAN);

    let shader = read_compiled(path)?;
    println!("{}Name:{} {}", BOLD, RESET, shader.name());
    println!("{}UUID:{} {}", BOLD, RESET, shader.uuid());

    if shader.is_empty() {
        print_warning("Record holds no compiled stages.");
        return Ok(());
    }

    for line in summary_lines(&shader) {
        println!("  {line}");
    }
    Ok(())
}

fn summary_lines(shader: &CompiledShader) -> Vec<String> {
    let size = |blob: Option<&[u8]>| match blob {
        Some(blob) => format_size(blob.len()),
        None => "-".to_string(),
    };
    shader
        .platforms()
        .into_iter()
        .map(|platform| {
            format!(
                "{:<8} vertex {:>10}  fragment {:>10}",
                platform,
                size(shader.compiled_vertex_shader(platform)),
                size(shader.compiled_fragment_shader(platform))
            )
        })
        .collect()
}
