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

use crate::constants::LOOKAHEAD_BYTES;
use std::io::{BufRead, BufReader, ErrorKind, Read, Result as IoResult};

/// Default capacity of the internal read buffer.
const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// A buffered wrapper around any `Read` source that tracks how many bytes
/// have been consumed and can peek past the current position.
///
/// Peeking goes through [`BufRead::fill_buf`], so checking for more data
/// never consumes a byte. Bytes seen by a peek are returned again by the
/// next read.
pub struct LookaheadSource<Source: Read> {
    /// The buffered source
    source: BufReader<Source>,

    /// Number of bytes consumed so far
    position: u64,
}

impl<Source: Read> LookaheadSource<Source> {
    /// Wraps `source` with the default buffer capacity.
    pub fn new(source: Source) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, source)
    }

    /// Wraps `source` with a buffer of at least `capacity` bytes.
    pub fn with_capacity(capacity: usize, source: Source) -> Self {
        // A zero-sized buffer could never hold the lookahead byte.
        let capacity = capacity.max(LOOKAHEAD_BYTES);
        Self {
            source: BufReader::with_capacity(capacity, source),
            position: 0,
        }
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns true if at least one more byte can be read.
    ///
    /// Does not consume anything and does not move [`position`](Self::position).
    pub fn has_remaining(&mut self) -> IoResult<bool> {
        loop {
            match self.source.fill_buf() {
                Ok(buf) => return Ok(buf.len() >= LOOKAHEAD_BYTES),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads until `buf` is full or the source is exhausted.
    ///
    /// Returns the number of bytes read, which is less than `buf.len()`
    /// only at end of stream.
    pub fn read_up_to(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let mut off = 0;

        while off < buf.len() {
            match self.read(&mut buf[off..]) {
                Ok(0) => break,
                Ok(n) => off += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(off)
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &Source {
        self.source.get_ref()
    }

    /// Returns the underlying source, consuming self.
    ///
    /// Any bytes already buffered are lost.
    pub fn into_inner(self) -> Source {
        self.source.into_inner()
    }
}

impl<Source: Read> Read for LookaheadSource<Source> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let bytes_read = self.source.read(buf)?;
        self.position += bytes_read as u64;
        Ok(bytes_read)
    }
}
