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

//! I/O side of the shader pipeline: running the external compiler, driving
//! a shader pair through every backend target, and persisting the results.

pub mod compiler;
pub mod pipeline;
pub mod store;

pub use compiler::{CompileError, CompileRequest, ShaderCompiler, ShaderSource, ShadercCompiler};
pub use pipeline::{compile_shader, resolve_targets, CompileOptions, UnknownTarget};
pub use store::{read_compiled, write_compiled, CompiledShaderLoader};
