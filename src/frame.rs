// Copyright 2024
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The unit delivered over the block interface.

use bytes::Bytes;

use crate::byte_order::reverse_bytes;

/// One handshake on the block interface.
///
/// `data` is always in word order (see [`crate::byte_order`]). A frame with
/// `valid == false` carries an all-zero word and never has `last` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Whether this frame carries real data.
    pub valid: bool,

    /// The block in interface word order.
    pub data: Bytes,

    /// Whether this is the final block of the stream.
    pub last: bool,
}

impl Frame {
    /// The all-zero, not-valid frame emitted before streaming starts and
    /// after it ends.
    pub fn idle(block_size: usize) -> Self {
        Self {
            valid: false,
            data: Bytes::from(vec![0u8; block_size]),
            last: false,
        }
    }

    /// A data frame carrying `word`, already in word order.
    pub fn data(word: Bytes, last: bool) -> Self {
        Self {
            valid: true,
            data: word,
            last,
        }
    }

    /// Returns true for an idle frame.
    pub fn is_idle(&self) -> bool {
        !self.valid
    }

    /// Returns the block bytes in file order.
    pub fn to_file_order(&self) -> Bytes {
        reverse_bytes(&self.data)
    }
}
