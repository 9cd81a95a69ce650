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

//! Conversion between file byte order and interface word order.
//!
//! The input file is byte-addressed in natural reading order. The block
//! interface is word-addressed: index 0 of a word holds the most significant
//! byte, which is the *last* byte read from the file. The two layouts are
//! related by a full reversal:
//!
//! ```text
//! word[i] = file_bytes[(B - 1) - i]
//! ```
//!
//! The same transform converts a result word back to display order, so one
//! helper serves both directions.

use bytes::{BufMut, Bytes, BytesMut};

/// Returns a copy of `bytes` with its byte order reversed.
///
/// Applying this twice yields the original sequence.
pub fn reverse_bytes(bytes: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(bytes.len());
    for &b in bytes.iter().rev() {
        out.put_u8(b);
    }
    out.freeze()
}
