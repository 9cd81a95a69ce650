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

//! Blockfeed streams a padded input file to a block consumer.
//!
//! The file is cut into fixed-width blocks (32 bytes by default). Each block
//! is reversed into interface word order and delivered with `valid` and
//! `last` flags; end of stream is detected by peeking one byte past the
//! block. A result sink takes the consumer's final word, converts it back to
//! display order and signals the host to finish.

pub mod byte_order;
pub mod constants;
pub mod error;
pub mod frame;
pub mod interface;
pub mod session;
pub mod sink;
pub mod stream;

#[cfg(test)]
mod tests;

// Re-exports for a cleaner API
pub use error::{FeederError, Result};
pub use frame::Frame;
pub use interface::{FinishFlag, FrameRecorder, InputInterface, SimulationControl};
pub use session::FeederSession;
pub use sink::{ResultSink, ResultValue};
pub use stream::{FeederConfig, StreamReader};
