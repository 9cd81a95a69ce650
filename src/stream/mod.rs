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

//! Block streaming from a padded input file.
//!
//! This module turns a byte stream into a sequence of interface frames.
//!
//! # Key Components
//!
//! - [`reader::StreamReader`]: Produces one frame per call, with `valid` and
//!   `last` flags derived from a one-byte lookahead.
//! - [`reader::FeederConfig`]: Configuration options (block size).
//! - [`source::LookaheadSource`]: Buffered source that tracks its position and
//!   can peek without consuming.
//!
//! # Frame Sequence
//!
//! For an input of `n * B` bytes the reader produces:
//!
//! ```text
//! data(last=false) x (n - 1), data(last=true), idle, idle, ...
//! ```
//!
//! An empty input produces only idle frames.

pub mod reader;
pub mod source;

pub use reader::{Blocks, FeederConfig, ReaderState, StreamReader};

#[cfg(test)]
mod tests;
