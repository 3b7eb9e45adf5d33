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

//! Errors raised while encoding or decoding compiled shader records.

use std::fmt;

/// An error related to the binary encoding of a [`crate::CompiledShader`].
#[derive(Debug)]
pub enum RecordError {
    /// The record could not be serialized.
    Encode(bincode::error::EncodeError),
    /// The bytes are not a valid encoded record.
    Decode(bincode::error::DecodeError),
    /// The bytes decoded, but data was left over after the record.
    TrailingBytes {
        /// Number of bytes consumed by the record.
        consumed: usize,
        /// Total number of bytes provided.
        total: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Encode(err) => write!(f, "Failed to encode shader record: {err}"),
            RecordError::Decode(err) => write!(f, "Failed to decode shader record: {err}"),
            RecordError::TrailingBytes { consumed, total } => write!(
                f,
                "Shader record ended after {consumed} of {total} bytes"
            ),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Encode(err) => Some(err),
            RecordError::Decode(err) => Some(err),
            RecordError::TrailingBytes { .. } => None,
        }
    }
}

impl From<bincode::error::EncodeError> for RecordError {
    fn from(err: bincode::error::EncodeError) -> Self {
        RecordError::Encode(err)
    }
}

impl From<bincode::error::DecodeError> for RecordError {
    fn from(err: bincode::error::DecodeError) -> Self {
        RecordError::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_bytes_display() {
        let err = RecordError::TrailingBytes {
            consumed: 12,
            total: 16,
        };
        assert_eq!(
            format!("{err}"),
            "Shader record ended after 12 of 16 bytes"
        );
    }
}
