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

//! Asset contracts shared by the shader pipeline.
//!
//! Compiled shader records are ordinary assets: they carry a stable
//! identifier and can be decoded from raw bytes by an [`AssetLoader`].
//! This module knows nothing about where those bytes come from.

mod loader;
mod uuid;

pub use loader::*;
pub use uuid::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits guarantee that a loaded asset can be handed to another
/// thread and kept for the lifetime of the application.
///
/// # Examples
///
/// ```
/// use shaderpack_core::asset::Asset;
///
/// struct Texture {
///     // ... fields
/// }
///
/// impl Asset for Texture {}
/// ```
pub trait Asset: Send + Sync + 'static {}
