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

//! A feeder bound to its host callbacks.
//!
//! [`FeederSession`] pairs a [`StreamReader`] and a [`ResultSink`] with the
//! host's [`InputInterface`]. It exposes the three calls a simulation host
//! makes: open (which drives the idle frame), [`get_input_data`] and
//! [`put_result`].
//!
//! [`get_input_data`]: FeederSession::get_input_data
//! [`put_result`]: FeederSession::put_result

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::frame::Frame;
use crate::interface::{InputInterface, SimulationControl};
use crate::sink::{ResultSink, ResultValue};
use crate::stream::{FeederConfig, StreamReader};

/// Streams one input to one consumer and collects its result.
pub struct FeederSession<Source: Read, Interface: InputInterface, Control: SimulationControl> {
    reader: StreamReader<Source>,
    interface: Interface,
    sink: ResultSink<Control>,
}

impl<Interface: InputInterface, Control: SimulationControl> FeederSession<File, Interface, Control> {
    /// Opens the input at `path` and drives the idle frame.
    ///
    /// A missing or unreadable file is reported here and no frame is driven.
    pub fn open<P: AsRef<Path>>(
        path: P,
        config: FeederConfig,
        interface: Interface,
        control: Control,
    ) -> Result<Self> {
        let reader = StreamReader::open(path, config)?;
        Ok(Self::start(reader, interface, control))
    }
}

impl<Source: Read, Interface: InputInterface, Control: SimulationControl>
    FeederSession<Source, Interface, Control>
{
    /// Builds a session over any source and drives the idle frame.
    pub fn new(
        source: Source,
        config: FeederConfig,
        interface: Interface,
        control: Control,
    ) -> Result<Self> {
        let reader = StreamReader::with_config(source, config)?;
        Ok(Self::start(reader, interface, control))
    }

    fn start(reader: StreamReader<Source>, mut interface: Interface, control: Control) -> Self {
        // The consumer sees a reset frame before any data.
        interface.drive_input(&reader.idle_frame());

        let sink = ResultSink::with_width(control, reader.block_size());
        Self {
            reader,
            interface,
            sink,
        }
    }

    /// Produces the next frame and drives it onto the interface.
    ///
    /// On error nothing is driven; the interface keeps its previous frame.
    pub fn get_input_data(&mut self) -> Result<Frame> {
        let frame = self.reader.next_frame()?;
        self.interface.drive_input(&frame);
        Ok(frame)
    }

    /// Hands the consumer's result word to the sink, which signals finish.
    ///
    /// # Panics
    ///
    /// Panics if called twice or with a word that is not one block wide.
    pub fn put_result(&mut self, word: &[u8]) -> ResultValue {
        self.sink.accept_result(word)
    }

    /// Returns the stream reader.
    pub fn reader(&self) -> &StreamReader<Source> {
        &self.reader
    }

    /// Returns the host interface.
    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Returns the result sink.
    pub fn sink(&self) -> &ResultSink<Control> {
        &self.sink
    }

    /// Tears the session down, returning the interface and control.
    pub fn into_parts(self) -> (Interface, Control) {
        (self.interface, self.sink.into_control())
    }
}
