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

use crate::helpers::print_info;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use shaderpack_io::ShaderSource;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the structure of the `Shaders.toml` manifest file.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShaderManifest {
    /// The shader compiler executable.
    pub shaderc: PathBuf,
    /// Where compiled records are written, one `<name>.shader` per entry.
    pub output_dir: PathBuf,
    /// Keep going when a single target fails.
    pub allow_partial: bool,
    /// The shader pairs to compile.
    #[serde(rename = "shader")]
    pub shaders: Vec<ShaderEntry>,
}

impl Default for ShaderManifest {
    /// Provides a default configuration if `Shaders.toml` is not found.
    ///
    /// `shaderc` is looked up on `PATH` and records land in `.dist/shaders`.
    fn default() -> Self {
        Self {
            shaderc: PathBuf::from("shaderc"),
            output_dir: PathBuf::from(".dist/shaders"),
            allow_partial: false,
            shaders: Vec::new(),
        }
    }
}

/// One `[[shader]]` table.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShaderEntry {
    pub name: String,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    #[serde(default)]
    pub include_dir: Option<PathBuf>,
    #[serde(default)]
    pub varying_def: Option<PathBuf>,
    /// Backend names to build; empty means all of them.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl ShaderEntry {
    pub fn source(&self) -> ShaderSource {
        ShaderSource {
            vertex: self.vertex.clone(),
            fragment: self.fragment.clone(),
            include_dir: self.include_dir.clone(),
            varying_def: self.varying_def.clone(),
        }
    }
}

impl ShaderManifest {
    /// The path a compiled entry is written to.
    pub fn output_path(&self, entry: &ShaderEntry) -> PathBuf {
        self.output_dir.join(format!("{}.shader", entry.name))
    }

    /// Checks that every entry maps to its own file inside `output_dir`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.shaders {
            let name = entry.name.as_str();
            if name.trim().is_empty() {
                bail!("Shader entry has an empty name");
            }
            if name.contains(['/', '\\']) || name.contains("..") {
                bail!("Shader name '{}' must not contain path separators or '..'", name);
            }
            if !seen.insert(name) {
                bail!("Shader name '{}' is listed more than once", name);
            }
        }
        Ok(())
    }
}

/// Loads the manifest at `path`.
/// If the file does not exist, it returns the default configuration.
pub fn load_manifest(path: &Path) -> Result<ShaderManifest> {
    if !path.exists() {
        print_info(&format!(
            "No '{}' found. Using default configuration.",
            path.display()
        ));
        return Ok(ShaderManifest::default());
    }

    print_info(&format!("Found '{}'. Loading configuration.", path.display()));
    let manifest_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file at '{}'", path.display()))?;
    parse_manifest(&manifest_str)
        .with_context(|| format!("Invalid manifest '{}'", path.display()))
}

fn parse_manifest(manifest_str: &str) -> Result<ShaderManifest> {
    let manifest: ShaderManifest = toml::from_str(manifest_str)?;
    manifest.validate()?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        assert_eq!(parse_manifest("").unwrap(), ShaderManifest::default());
    }

    #[test]
    fn full_entry_parses() {
        let manifest = parse_manifest(
            r#"
            shaderc = "tools/shaderc"
            output_dir = "build/shaders"
            allow_partial = true

            [[shader]]
            name = "cubes"
            vertex = "shaders/vs_cubes.sc"
            fragment = "shaders/fs_cubes.sc"
            include_dir = "shaders/include"
            varying_def = "shaders/varying.def.sc"
            targets = ["D3D11", "OpenGL"]

            [[shader]]
            name = "bump"
            vertex = "shaders/vs_bump.sc"
            fragment = "shaders/fs_bump.sc"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.shaderc, PathBuf::from("tools/shaderc"));
        assert!(manifest.allow_partial);
        assert_eq!(manifest.shaders.len(), 2);

        let cubes = &manifest.shaders[0];
        assert_eq!(cubes.targets, ["D3D11", "OpenGL"]);
        assert_eq!(
            cubes.source().varying_def,
            Some(PathBuf::from("shaders/varying.def.sc"))
        );
        assert_eq!(
            manifest.output_path(cubes),
            PathBuf::from("build/shaders/cubes.shader")
        );

        let bump = &manifest.shaders[1];
        assert!(bump.targets.is_empty());
        assert!(bump.include_dir.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_manifest("shader_compiler = \"x\"").is_err());
    }

    const TWO_CUBES: &str = r#"
        [[shader]]
        name = "cubes"
        vertex = "a/vs.sc"
        fragment = "a/fs.sc"

        [[shader]]
        name = "cubes"
        vertex = "b/vs.sc"
        fragment = "b/fs.sc"
        "#;

    #[test]
    fn duplicate_names_are_rejected() {
        let err = parse_manifest(TWO_CUBES).unwrap_err();
        assert!(err.to_string().contains("'cubes' is listed more than once"));
    }

    #[test]
    fn names_cannot_leave_output_dir() {
        for name in ["../escaped", "nested/cubes", "win\\\\cubes", ".."] {
            let manifest = format!(
                "[[shader]]\nname = '{name}'\nvertex = 'vs.sc'\nfragment = 'fs.sc'\n"
            );
            let err = parse_manifest(&manifest).unwrap_err();
            assert!(
                err.to_string().contains("path separators"),
                "accepted '{name}'"
            );
        }
    }

    #[test]
    fn load_reports_manifest_path_on_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Shaders.toml");
        fs::write(&path, TWO_CUBES).unwrap();

        let err = load_manifest(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Shaders.toml"));
        assert!(message.contains("listed more than once"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = load_manifest(&dir.path().join("Shaders.toml")).unwrap();
        assert!(manifest.shaders.is_empty());
        assert_eq!(manifest.output_dir, PathBuf::from(".dist/shaders"));
    }
}
