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

//! Constants shared by the feeder and the result sink.

/// Width of the block interface data bus in bits.
pub const INTERFACE_DATA_WIDTH: usize = 256;

/// Width of the result value in bits.
pub const RESULT_WIDTH: usize = 256;

/// Default block size in bytes (one interface word).
pub const DEFAULT_BLOCK_SIZE: usize = INTERFACE_DATA_WIDTH / 8;

/// Number of bytes peeked past a block boundary to detect end-of-stream.
pub const LOOKAHEAD_BYTES: usize = 1;

/// Input file a host opens when it has no path of its own.
pub const DEFAULT_INPUT_PATH: &str = "test_file.txt.padded";
