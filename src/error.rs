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

//! Error types for the block feeder.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for blockfeed operations.
#[derive(Debug, Error)]
pub enum FeederError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened. Fatal, reported before
    /// any block is produced.
    #[error("Failed to open input file '{}': {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured block size cannot be used.
    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// The reader hit a fatal error earlier and will not produce more blocks.
    #[error("Reader has failed and cannot produce further blocks")]
    ReaderFailed,
}

/// A specialized Result type for blockfeed operations.
pub type Result<T> = std::result::Result<T, FeederError>;
