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
use crate::asset::{Asset, AssetUUID};
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The output of cross-compiling one vertex/fragment shader pair.
///
/// Each stage maps a backend name (e.g. `"D3D11"`, `"Metal"`) to the binary
/// blob the compiler produced for it. Storing a blob for a backend that
/// already has one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledShader {
    name: String,
    vertex: BTreeMap<String, Vec<u8>>,
    fragment: BTreeMap<String, Vec<u8>>,
}

impl Asset for CompiledShader {}

impl CompiledShader {
    /// Creates an empty record for the shader called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The shader's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A stable identifier derived from the shader's name.
    pub fn uuid(&self) -> AssetUUID {
        AssetUUID::new_v5(&self.name)
    }

    /// Stores the vertex stage blob for `platform`, replacing any previous one.
    pub fn add_compiled_vertex_shader(&mut self, platform: impl Into<String>, blob: Vec<u8>) {
        self.insert(ShaderStage::Vertex, platform, blob);
    }

    /// Stores the fragment stage blob for `platform`, replacing any previous one.
    pub fn add_compiled_fragment_shader(&mut self, platform: impl Into<String>, blob: Vec<u8>) {
        self.insert(ShaderStage::Fragment, platform, blob);
    }

    /// Returns the vertex stage blob compiled for `platform`.
    pub fn compiled_vertex_shader(&self, platform: &str) -> Option<&[u8]> {
        self.get(ShaderStage::Vertex, platform)
    }

    /// Returns the fragment stage blob compiled for `platform`.
    pub fn compiled_fragment_shader(&self, platform: &str) -> Option<&[u8]> {
        self.get(ShaderStage::Fragment, platform)
    }

    /// Stores `blob` for `stage` under `platform`, returning the blob it replaced.
    pub fn insert(
        &mut self,
        stage: ShaderStage,
        platform: impl Into<String>,
        blob: Vec<u8>,
    ) -> Option<Vec<u8>> {
        self.stage_mut(stage).insert(platform.into(), blob)
    }

    /// Returns the blob stored for `stage` under `platform`.
    pub fn get(&self, stage: ShaderStage, platform: &str) -> Option<&[u8]> {
        self.stage(stage).get(platform).map(Vec::as_slice)
    }

    /// Iterates over the `(platform, blob)` pairs of one stage, sorted by platform.
    pub fn iter_stage(&self, stage: ShaderStage) -> impl Iterator<Item = (&str, &[u8])> {
        self.stage(stage)
            .iter()
            .map(|(platform, blob)| (platform.as_str(), blob.as_slice()))
    }

    /// Every platform that has a blob in at least one stage, sorted.
    pub fn platforms(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .vertex
            .keys()
            .chain(self.fragment.keys())
            .map(String::as_str)
            .collect();
        names.into_iter().collect()
    }

    /// True when both stages have a blob for `platform`.
    pub fn is_complete(&self, platform: &str) -> bool {
        self.vertex.contains_key(platform) && self.fragment.contains_key(platform)
    }

    /// True when neither stage holds any blob.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }

    /// Encodes the record with bincode's standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        let config = bincode::config::standard();
        Ok(bincode::serde::encode_to_vec(self, config)?)
    }

    /// Decodes a record produced by [`CompiledShader::to_bytes`].
    ///
    /// # Errors
    /// Fails if the bytes are not a valid record or carry trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let config = bincode::config::standard();
        let (record, consumed): (Self, usize) = bincode::serde::decode_from_slice(bytes, config)?;
        if consumed != bytes.len() {
            return Err(RecordError::TrailingBytes {
                consumed,
                total: bytes.len(),
            });
        }
        Ok(record)
    }

    fn stage(&self, stage: ShaderStage) -> &BTreeMap<String, Vec<u8>> {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    fn stage_mut(&mut self, stage: ShaderStage) -> &mut BTreeMap<String, Vec<u8>> {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }
}
