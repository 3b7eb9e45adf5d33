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

use super::ShaderStage;
use std::fmt;

/// The operating system family the compiler generates code for.
///
/// This is the value of the compiler's `--platform` option, not the name the
/// compiled blob is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    /// Direct3D bytecode.
    Windows,
    /// Metal and desktop GLSL.
    Osx,
    /// Desktop GLSL.
    Linux,
    /// GLSL ES.
    Android,
    /// Metal on mobile.
    Ios,
    /// WebGL flavoured GLSL ES.
    AsmJs,
}

impl TargetPlatform {
    /// The string passed after `--platform`.
    pub fn as_arg(self) -> &'static str {
        match self {
            TargetPlatform::Windows => "windows",
            TargetPlatform::Osx => "osx",
            TargetPlatform::Linux => "linux",
            TargetPlatform::Android => "android",
            TargetPlatform::Ios => "ios",
            TargetPlatform::AsmJs => "asm.js",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// One row of the cross-compilation table: a named graphics backend and the
/// compiler settings that produce its binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendTarget {
    /// The key compiled blobs are stored under (e.g. `"D3D11"`).
    pub name: &'static str,
    /// The compiler `--platform` value.
    pub platform: TargetPlatform,
    /// Shader model for the vertex stage.
    pub vertex_profile: &'static str,
    /// Shader model for the fragment stage.
    pub fragment_profile: &'static str,
}

impl BackendTarget {
    /// Returns the profile to compile `stage` with.
    pub fn profile(&self, stage: ShaderStage) -> &'static str {
        match stage {
            ShaderStage::Vertex => self.vertex_profile,
            ShaderStage::Fragment => self.fragment_profile,
        }
    }
}

/// The backends every shader pair is compiled for, in compilation order.
pub const DEFAULT_TARGETS: [BackendTarget; 5] = [
    BackendTarget {
        name: "D3D12",
        platform: TargetPlatform::Windows,
        vertex_profile: "vs_5_0",
        fragment_profile: "ps_5_0",
    },
    BackendTarget {
        name: "D3D11",
        platform: TargetPlatform::Windows,
        vertex_profile: "vs_4_0",
        fragment_profile: "ps_4_0",
    },
    BackendTarget {
        name: "D3D9",
        platform: TargetPlatform::Windows,
        vertex_profile: "vs_3_0",
        fragment_profile: "ps_3_0",
    },
    BackendTarget {
        name: "Metal",
        platform: TargetPlatform::Osx,
        vertex_profile: "metal",
        fragment_profile: "metal",
    },
    BackendTarget {
        name: "OpenGL",
        platform: TargetPlatform::Osx,
        vertex_profile: "120",
        fragment_profile: "120",
    },
];

/// Looks up a default target by its exact name.
pub fn find_target(name: &str) -> Option<&'static BackendTarget> {
    DEFAULT_TARGETS.iter().find(|target| target.name == name)
}
