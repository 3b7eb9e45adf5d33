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

//! Reading and writing compiled shader records.

use anyhow::{Context, Result};
use log::debug;
use shaderpack_core::asset::AssetLoader;
use shaderpack_core::CompiledShader;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Writes `shader` to `path`, creating parent directories as needed.
pub fn write_compiled(path: &Path, shader: &CompiledShader) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let bytes = shader
        .to_bytes()
        .with_context(|| format!("Failed to serialize shader '{}'", shader.name()))?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write shader record to '{}'", path.display()))?;

    debug!(
        "Wrote shader '{}' ({} bytes) to '{}'",
        shader.name(),
        bytes.len(),
        path.display()
    );
    Ok(())
}

/// Reads a record previously written by [`write_compiled`].
pub fn read_compiled(path: &Path) -> Result<CompiledShader> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read shader record '{}'", path.display()))?;
    CompiledShader::from_bytes(&bytes)
        .with_context(|| format!("Invalid shader record '{}'", path.display()))
}

/// Decodes [`CompiledShader`] records for asset infrastructure.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompiledShaderLoader;

impl AssetLoader<CompiledShader> for CompiledShaderLoader {
    fn load(&self, bytes: &[u8]) -> Result<CompiledShader, Box<dyn Error + Send + Sync>> {
        Ok(CompiledShader::from_bytes(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompiledShader {
        let mut shader = CompiledShader::new("cubes");
        shader.add_compiled_vertex_shader("D3D11", vec![0x44, 0x58, 0x42, 0x43]);
        shader.add_compiled_fragment_shader("D3D11", vec![0x01]);
        shader
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/cubes.shader");

        write_compiled(&path, &sample()).unwrap();

        assert!(path.is_file());
        assert_eq!(read_compiled(&path).unwrap(), sample());
    }

    #[test]
    fn reading_garbage_fails_with_path_in_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.shader");
        fs::write(&path, [0xFFu8; 3]).unwrap();

        let err = read_compiled(&path).unwrap_err();
        assert!(err.to_string().contains("broken.shader"));
    }

    #[test]
    fn loader_decodes_record_bytes() {
        let bytes = sample().to_bytes().unwrap();
        let loaded = CompiledShaderLoader.load(&bytes).unwrap();
        assert_eq!(loaded.compiled_vertex_shader("D3D11"), Some(&[0x44, 0x58, 0x42, 0x43][..]));
    }
}
