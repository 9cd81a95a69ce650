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

//! Streams real files and checks the frame sequence against the file contents.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use blockfeed::error::{FeederError, Result};
use blockfeed::{FeederConfig, Frame, StreamReader};

/// Helper function to write `bytes` to a temp file and return the file.
fn write_input(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write input");
    file.flush().expect("Failed to flush input");
    file
}

/// Helper function to read every data frame from a file.
fn read_all_frames(file: &NamedTempFile, config: FeederConfig) -> Result<Vec<Frame>> {
    let mut reader = StreamReader::open(file.path(), config)?;
    reader.blocks().collect()
}

#[test]
fn test_sequential_example_file() -> Result<()> {
    let bytes: Vec<u8> = (0x01..=0x20).collect();
    let file = write_input(&bytes);

    let frames = read_all_frames(&file, FeederConfig::default())?;

    assert_eq!(frames.len(), 1);
    assert!(frames[0].valid);
    assert!(frames[0].last);
    assert_eq!(frames[0].data[0], 0x20);
    assert_eq!(frames[0].data[31], 0x01);
    Ok(())
}

#[test]
fn test_random_files_reconstruct() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let blocks = rng.gen_range(1..=64usize);
        let mut bytes = vec![0u8; blocks * 32];
        rng.fill(&mut bytes[..]);

        let file = write_input(&bytes);
        let frames = read_all_frames(&file, FeederConfig::default())?;

        assert_eq!(frames.len(), blocks);
        assert_eq!(frames.iter().filter(|f| f.last).count(), 1);
        assert!(frames.last().map(|f| f.last).unwrap_or(false));

        let rebuilt: Vec<u8> = frames.iter().flat_map(|f| f.to_file_order().to_vec()).collect();
        assert_eq!(rebuilt, bytes);
    }
    Ok(())
}

#[test]
fn test_large_file_crosses_buffer_boundaries() -> Result<()> {
    // Larger than the internal read buffer, and not a multiple of it.
    let bytes: Vec<u8> = (0..32 * 1000).map(|i| (i % 253) as u8).collect();
    let file = write_input(&bytes);

    let mut reader = StreamReader::open(file.path(), FeederConfig::default())?;
    let frames: Vec<Frame> = reader.blocks().collect::<Result<_>>()?;

    assert_eq!(frames.len(), 1000);
    assert_eq!(reader.position(), bytes.len() as u64);

    let rebuilt: Vec<u8> = frames.iter().flat_map(|f| f.to_file_order().to_vec()).collect();
    assert_eq!(rebuilt, bytes);
    Ok(())
}

#[test]
fn test_empty_file() -> Result<()> {
    let file = write_input(&[]);
    let mut reader = StreamReader::open(file.path(), FeederConfig::default())?;

    for _ in 0..3 {
        assert_eq!(reader.next_frame()?, Frame::idle(32));
    }
    assert_eq!(reader.position(), 0);
    Ok(())
}

#[test]
fn test_unpadded_file() -> Result<()> {
    let file = write_input(&[0x55; 100]);

    let frames = read_all_frames(&file, FeederConfig::default())?;

    // Three full blocks, then a 4-byte tail zero-filled into the last block.
    assert_eq!(frames.len(), 4);
    assert_eq!(frames.iter().filter(|f| f.last).count(), 1);
    assert!(frames[3].last);

    let tail = frames[3].to_file_order();
    assert_eq!(&tail[..4], &[0x55u8; 4]);
    assert!(tail[4..].iter().all(|&b| b == 0));
    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.padded");

    let result = StreamReader::open(&path, FeederConfig::default());
    assert!(matches!(result, Err(FeederError::OpenInput { .. })));
}
