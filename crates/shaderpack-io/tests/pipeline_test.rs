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

use anyhow::Result;
use shaderpack_core::{BackendTarget, ShaderStage, DEFAULT_TARGETS};
use shaderpack_io::{
    compile_shader, read_compiled, write_compiled, CompileError, CompileOptions, ShaderCompiler,
    ShaderSource,
};
use std::cell::RefCell;
use tempfile::{tempdir, TempDir};

// --- Test Setup: a compiler that records calls and echoes its settings ---
#[derive(Default)]
struct EchoCompiler {
    calls: RefCell<Vec<(String, ShaderStage)>>,
    fail_on: Option<(&'static str, ShaderStage)>,
}

impl ShaderCompiler for EchoCompiler {
    fn compile(
        &self,
        _source: &ShaderSource,
        stage: ShaderStage,
        target: &BackendTarget,
    ) -> Result<Vec<u8>, CompileError> {
        self.calls
            .borrow_mut()
            .push((target.name.to_string(), stage));

        if self.fail_on == Some((target.name, stage)) {
            return Err(CompileError::Failed {
                code: Some(1),
                diagnostics: "error: unsupported profile".to_string(),
            });
        }

        Ok(format!(
            "{}|{}|{}",
            stage.type_flag(),
            target.platform,
            target.profile(stage)
        )
        .into_bytes())
    }
}

// A compiler whose every call fails with the error built by `make_error`.
struct RejectingCompiler {
    make_error: fn() -> CompileError,
    calls: RefCell<usize>,
}

impl RejectingCompiler {
    fn new(make_error: fn() -> CompileError) -> Self {
        Self {
            make_error,
            calls: RefCell::new(0),
        }
    }
}

impl ShaderCompiler for RejectingCompiler {
    fn compile(
        &self,
        _source: &ShaderSource,
        _stage: ShaderStage,
        _target: &BackendTarget,
    ) -> Result<Vec<u8>, CompileError> {
        *self.calls.borrow_mut() += 1;
        Err((self.make_error)())
    }
}

fn source_pair() -> Result<(TempDir, ShaderSource)> {
    let dir = tempdir()?;
    let vertex = dir.path().join("vs_cubes.sc");
    let fragment = dir.path().join("fs_cubes.sc");
    std::fs::write(&vertex, "void main() {}")?;
    std::fs::write(&fragment, "void main() {}")?;
    let source = ShaderSource::new(vertex, fragment)
        .with_varying_def(dir.path().join("varying.def.sc"));
    Ok((dir, source))
}
// ---

#[test]
fn every_default_target_gets_both_stages() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = EchoCompiler::default();

    let compiled = compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions::default(),
    )?;

    assert_eq!(compiled.platforms(), vec!["D3D11", "D3D12", "D3D9", "Metal", "OpenGL"]);
    assert_eq!(
        compiled.compiled_vertex_shader("D3D12"),
        Some(&b"v|windows|vs_5_0"[..])
    );
    assert_eq!(
        compiled.compiled_fragment_shader("D3D9"),
        Some(&b"f|windows|ps_3_0"[..])
    );
    assert_eq!(
        compiled.compiled_fragment_shader("OpenGL"),
        Some(&b"f|osx|120"[..])
    );
    assert_eq!(
        compiled.compiled_vertex_shader("Metal"),
        Some(&b"v|osx|metal"[..])
    );
    Ok(())
}

#[test]
fn targets_run_in_table_order_vertex_first() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = EchoCompiler::default();

    compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions::default(),
    )?;

    let calls = compiler.calls.borrow();
    assert_eq!(calls.len(), 10);
    assert_eq!(calls[0], ("D3D12".to_string(), ShaderStage::Vertex));
    assert_eq!(calls[1], ("D3D12".to_string(), ShaderStage::Fragment));
    assert_eq!(calls[9], ("OpenGL".to_string(), ShaderStage::Fragment));
    Ok(())
}

#[test]
fn strict_mode_stops_at_first_failure() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = EchoCompiler {
        fail_on: Some(("D3D9", ShaderStage::Fragment)),
        ..Default::default()
    };

    let err = compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions::default(),
    )
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("fragment stage of 'cubes' for D3D9"));
    assert!(message.contains("unsupported profile"));
    // D3D12 + D3D11 (4 calls) + D3D9 vertex + D3D9 fragment.
    assert_eq!(compiler.calls.borrow().len(), 6);
    Ok(())
}

#[test]
fn partial_mode_omits_failed_stage() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = EchoCompiler {
        fail_on: Some(("Metal", ShaderStage::Vertex)),
        ..Default::default()
    };

    let compiled = compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions {
            allow_partial: true,
        },
    )?;

    assert!(compiled.compiled_vertex_shader("Metal").is_none());
    assert!(compiled.compiled_fragment_shader("Metal").is_some());
    assert!(!compiled.is_complete("Metal"));
    assert!(compiled.is_complete("OpenGL"));
    Ok(())
}

#[test]
fn partial_mode_fails_when_nothing_compiled() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = RejectingCompiler::new(|| CompileError::Failed {
        code: Some(1),
        diagnostics: "error: bad".to_string(),
    });

    let result = compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions {
            allow_partial: true,
        },
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("'cubes'"));
    assert_eq!(*compiler.calls.borrow(), 10);
    Ok(())
}

#[test]
fn partial_mode_still_stops_when_compiler_cannot_start() -> Result<()> {
    let (_dir, source) = source_pair()?;
    let compiler = RejectingCompiler::new(|| CompileError::Spawn {
        program: "no-such-shaderc".into(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    });

    let err = compile_shader(
        &compiler,
        "cubes",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions {
            allow_partial: true,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompileError>(),
        Some(CompileError::Spawn { .. })
    ));
    assert_eq!(*compiler.calls.borrow(), 1);
    Ok(())
}

#[test]
fn missing_source_fails_before_compiling() -> Result<()> {
    let dir = tempdir()?;
    let source = ShaderSource::new(dir.path().join("vs.sc"), dir.path().join("fs.sc"));
    let compiler = EchoCompiler::default();

    let err = compile_shader(
        &compiler,
        "ghost",
        &source,
        &DEFAULT_TARGETS,
        &CompileOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompileError>(),
        Some(CompileError::SourceNotFound { .. })
    ));
    assert!(compiler.calls.borrow().is_empty());
    Ok(())
}

#[test]
fn compiled_record_survives_disk() -> Result<()> {
    let (dir, source) = source_pair()?;
    let compiled = compile_shader(
        &EchoCompiler::default(),
        "cubes",
        &source,
        &DEFAULT_TARGETS[..2],
        &CompileOptions::default(),
    )?;

    let path = dir.path().join("out/cubes.shader");
    write_compiled(&path, &compiled)?;
    let loaded = read_compiled(&path)?;

    assert_eq!(loaded, compiled);
    assert_eq!(loaded.name(), "cubes");
    assert_eq!(loaded.platforms(), vec!["D3D11", "D3D12"]);
    Ok(())
}
