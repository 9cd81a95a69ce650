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

//! Callbacks into the hosting environment.
//!
//! The feeder never decides what consumes its blocks. A host supplies an
//! [`InputInterface`] that receives every frame and a [`SimulationControl`]
//! that is told when no more work is needed.

use crate::frame::Frame;

/// Receives frames from the feeder, one per handshake.
pub trait InputInterface {
    /// Drive one frame onto the block interface.
    fn drive_input(&mut self, frame: &Frame);
}

/// Lets the feeder tell its scheduler to stop.
pub trait SimulationControl {
    /// Request that the hosting scheduler finish.
    fn finish(&mut self);
}

impl<T: InputInterface + ?Sized> InputInterface for &mut T {
    fn drive_input(&mut self, frame: &Frame) {
        (**self).drive_input(frame)
    }
}

impl<T: SimulationControl + ?Sized> SimulationControl for &mut T {
    fn finish(&mut self) {
        (**self).finish()
    }
}

/// An [`InputInterface`] that keeps every frame it is driven with.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames received so far, in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently received frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Only the frames that carried data.
    pub fn valid_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.valid)
    }

    /// Consumes the recorder, returning its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl InputInterface for FrameRecorder {
    fn drive_input(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

/// A [`SimulationControl`] that counts finish requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinishFlag {
    requests: u32,
}

impl FinishFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether finish has been requested at least once.
    pub fn is_finished(&self) -> bool {
        self.requests > 0
    }

    /// How many times finish was requested.
    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl SimulationControl for FinishFlag {
    fn finish(&mut self) {
        self.requests += 1;
    }
}
