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

use shaderpack_core::{ShaderStage, TargetPlatform};
use std::ffi::OsString;
use std::path::Path;

/// The command line of a single `shaderc` invocation.
///
/// Mandatory options come first, in the order `-f -o --platform --type`,
/// followed by whichever optional ones are set:
/// `-i`, `--bin2c`, `--varyingdef`, `-p`.
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    input: &'a Path,
    output: &'a Path,
    platform: TargetPlatform,
    stage: ShaderStage,
    include_dir: Option<&'a Path>,
    bin2c: Option<&'a Path>,
    varying_def: Option<&'a Path>,
    profile: Option<&'a str>,
}

impl<'a> CompileRequest<'a> {
    /// Creates a request with only the mandatory options.
    pub fn new(
        input: &'a Path,
        output: &'a Path,
        platform: TargetPlatform,
        stage: ShaderStage,
    ) -> Self {
        Self {
            input,
            output,
            platform,
            stage,
            include_dir: None,
            bin2c: None,
            varying_def: None,
            profile: None,
        }
    }

    /// `-i <dir>`: include search path (several paths separated by `;`).
    pub fn include_dir(mut self, dir: Option<&'a Path>) -> Self {
        self.include_dir = dir;
        self
    }

    /// `--bin2c <file>`: also emit a C header.
    pub fn bin2c(mut self, path: Option<&'a Path>) -> Self {
        self.bin2c = path;
        self
    }

    /// `--varyingdef <file>`: path to `varying.def.sc`.
    pub fn varying_def(mut self, path: Option<&'a Path>) -> Self {
        self.varying_def = path;
        self
    }

    /// `-p <profile>`: shader model, e.g. `ps_3_0`.
    pub fn profile(mut self, profile: Option<&'a str>) -> Self {
        self.profile = profile;
        self
    }

    /// Renders the argument vector, without the program name.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(16);
        let mut push = |flag: &str, value: OsString| {
            args.push(flag.into());
            args.push(value);
        };

        push("-f", self.input.into());
        push("-o", self.output.into());
        push("--platform", self.platform.as_arg().into());
        push("--type", self.stage.type_flag().into());

        if let Some(dir) = self.include_dir {
            push("-i", dir.into());
        }
        if let Some(path) = self.bin2c {
            push("--bin2c", path.into());
        }
        if let Some(path) = self.varying_def {
            push("--varyingdef", path.into());
        }
        if let Some(profile) = self.profile {
            push("-p", profile.into());
        }

        args
    }
}
