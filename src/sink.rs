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

//! Capture of the consumer's final result.

use std::fmt;

use bytes::Bytes;
use log::info;

use crate::byte_order::reverse_bytes;
use crate::constants::RESULT_WIDTH;
use crate::interface::SimulationControl;

/// The consumer's result, in natural file/display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultValue {
    bytes: Bytes,
}

impl ResultValue {
    /// Returns the result bytes in display order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the result bytes, consuming self.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Lowercase hex rendering, two digits per byte.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8]> for ResultValue {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Accepts the single result word from the consumer and tells the
/// scheduler to finish.
///
/// The sink is one-shot. Delivering twice, or delivering a word of the wrong
/// width, is a caller bug and panics.
pub struct ResultSink<Control: SimulationControl> {
    control: Control,

    /// Expected result width in bytes.
    width: usize,

    delivered: bool,
}

impl<Control: SimulationControl> ResultSink<Control> {
    /// Creates a sink expecting a 256-bit result.
    pub fn new(control: Control) -> Self {
        Self::with_width(control, RESULT_WIDTH / 8)
    }

    /// Creates a sink expecting a result of `width` bytes.
    pub fn with_width(control: Control, width: usize) -> Self {
        Self {
            control,
            width,
            delivered: false,
        }
    }

    /// Converts `word` from interface word order to display order, logs it,
    /// and signals the scheduler to finish.
    ///
    /// # Panics
    ///
    /// Panics if called more than once, or if `word` is not exactly the
    /// configured width.
    pub fn accept_result(&mut self, word: &[u8]) -> ResultValue {
        assert!(!self.delivered, "result already delivered to this sink");
        assert_eq!(
            word.len(),
            self.width,
            "result word must be exactly {} bytes",
            self.width
        );

        let value = ResultValue {
            bytes: reverse_bytes(word),
        };
        info!("Digest is: {}", value);

        self.delivered = true;
        self.control.finish();

        value
    }

    /// Returns true once a result has been accepted.
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Returns the expected result width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns a reference to the scheduler control.
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Returns the scheduler control, consuming self.
    pub fn into_control(self) -> Control {
        self.control
    }
}
