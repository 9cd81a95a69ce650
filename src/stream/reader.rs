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

use crate::byte_order::reverse_bytes;
use crate::constants::DEFAULT_BLOCK_SIZE;
use crate::error::{FeederError, Result};
use crate::frame::Frame;
use crate::stream::source::LookaheadSource;
use bytes::BytesMut;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration options for [`StreamReader`].
#[derive(Debug, Clone)]
pub struct FeederConfig {
    /// Size of one block in bytes (default: 32, one 256-bit word).
    pub block_size: usize,
}

impl Default for FeederConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl FeederConfig {
    /// Creates a config with a custom block size.
    ///
    /// Returns an error if `block_size` is zero.
    pub fn with_block_size(block_size: usize) -> Result<Self> {
        validate_block_size(block_size)?;
        Ok(Self { block_size })
    }
}

fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        return Err(FeederError::InvalidBlockSize(block_size));
    }
    Ok(())
}

/// State of the stream reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// More blocks may follow.
    Streaming,
    /// The last block was delivered, or the input was empty.
    Exhausted,
    /// A read failed. No further blocks will be produced.
    Failed,
}

/// Produces one interface frame per call from a padded input stream.
///
/// Each call reads exactly `block_size` bytes, reverses them into word order
/// and peeks one byte further to decide whether this block is the last one.
/// The peeked byte is never consumed, so it becomes the first byte of the
/// next block.
///
/// Once the stream is exhausted every call returns the idle frame without
/// touching the source.
pub struct StreamReader<Source: Read> {
    /// The underlying source, with lookahead and position tracking
    source: LookaheadSource<Source>,

    /// Reader configuration.
    config: FeederConfig,

    /// Current state.
    state: ReaderState,

    /// Number of data blocks produced.
    blocks_read: u64,

    /// Scratch space holding the current block in file order.
    buffer: BytesMut,
}

impl StreamReader<File> {
    /// Opens the file at `path` for streaming.
    ///
    /// Failing to open the file is reported here, before any block is produced.
    pub fn open<P: AsRef<Path>>(path: P, config: FeederConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            error!("Failed to open input file {}: {}", path.display(), source);
            FeederError::OpenInput {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!("Opened input file {}", path.display());
        Self::with_config(file, config)
    }
}

impl<Source: Read> StreamReader<Source> {
    /// Creates a new StreamReader with the default configuration.
    pub fn new(source: Source) -> Result<Self> {
        Self::with_config(source, FeederConfig::default())
    }

    /// Creates a new StreamReader with a custom configuration.
    pub fn with_config(source: Source, config: FeederConfig) -> Result<Self> {
        validate_block_size(config.block_size)?;

        let buffer = BytesMut::with_capacity(config.block_size);

        Ok(Self {
            source: LookaheadSource::new(source),
            config,
            state: ReaderState::Streaming,
            blocks_read: 0,
            buffer,
        })
    }

    /// The all-zero, not-valid frame for this reader's block size.
    pub fn idle_frame(&self) -> Frame {
        Frame::idle(self.config.block_size)
    }

    /// Produces the next frame.
    ///
    /// Returns a data frame while input remains, with `last` set on the final
    /// block. Returns the idle frame once the stream is exhausted.
    ///
    /// A block cut short by end of stream is zero-filled to the block size
    /// and delivered as the last block.
    pub fn next_frame(&mut self) -> Result<Frame> {
        match self.state {
            ReaderState::Exhausted => return Ok(self.idle_frame()),
            ReaderState::Failed => return Err(FeederError::ReaderFailed),
            ReaderState::Streaming => (),
        }

        self.read_block().map_err(|e| {
            error!("Stopping reader at byte {}: {}", self.source.position(), e);
            self.state = ReaderState::Failed;
            e
        })
    }

    fn read_block(&mut self) -> Result<Frame> {
        if !self.source.has_remaining()? {
            info!("EOF after {} blocks", self.blocks_read);
            self.state = ReaderState::Exhausted;
            return Ok(self.idle_frame());
        }

        let block_size = self.config.block_size;
        let block_start = self.source.position();

        self.buffer.clear();
        self.buffer.resize(block_size, 0);

        // Bytes past a short read keep the zero fill from the resize above.
        let bytes_read = self.source.read_up_to(&mut self.buffer)?;
        let short = bytes_read < block_size;
        if short {
            warn!(
                "Input ended {} bytes into a {} byte block at byte {}; input was not padded",
                bytes_read, block_size, block_start
            );
        }

        let word = reverse_bytes(&self.buffer);
        self.blocks_read += 1;

        let last = short || !self.source.has_remaining()?;
        if last {
            info!("EOF after {} blocks", self.blocks_read);
            self.state = ReaderState::Exhausted;
        }

        debug!(
            "Read block {} at byte {} (last: {})",
            self.blocks_read, block_start, last
        );

        Ok(Frame::data(word, last))
    }

    /// Returns an iterator over the remaining data frames.
    ///
    /// The iterator stops after the `last` frame, or after the first error.
    pub fn blocks(&mut self) -> Blocks<'_, Source> {
        Blocks {
            reader: self,
            done: false,
        }
    }

    /// Returns the reader configuration.
    pub fn config(&self) -> &FeederConfig {
        &self.config
    }

    /// Returns the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    /// Returns the current state.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Returns true once the last block has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.state == ReaderState::Exhausted
    }

    /// Returns the number of bytes consumed from the source.
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Returns the number of data blocks produced so far.
    pub fn blocks_read(&self) -> u64 {
        self.blocks_read
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &Source {
        self.source.get_ref()
    }

    /// Returns the underlying source, consuming self.
    pub fn into_inner(self) -> Source {
        self.source.into_inner()
    }
}

/// Iterator over the data frames of a [`StreamReader`].
pub struct Blocks<'a, Source: Read> {
    reader: &'a mut StreamReader<Source>,
    done: bool,
}

impl<Source: Read> Iterator for Blocks<'_, Source> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_frame() {
            Ok(frame) if !frame.valid => {
                self.done = true;
                None
            }
            Ok(frame) => {
                self.done = frame.last;
                Some(Ok(frame))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
