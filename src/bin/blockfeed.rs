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

//! Dumps the frames a padded input file produces on the block interface.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blockfeed::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_INPUT_PATH};
use blockfeed::{FeederConfig, FeederError, FeederSession, Frame, InputInterface, SimulationControl};
use clap::Parser;
use log::{error, info};

#[derive(Parser, Debug)]
#[command(name = "blockfeed")]
#[command(about = "Stream a padded file onto the block interface and log every frame", long_about = None)]
struct Cli {
    /// Input file, padded to a multiple of the block size
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    path: PathBuf,

    /// Block size in bytes
    #[arg(default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

/// Logs every frame it is driven with.
struct LoggingInterface {
    driven: u64,
}

impl InputInterface for LoggingInterface {
    fn drive_input(&mut self, frame: &Frame) {
        self.driven += 1;
        let hex: String = frame.data.iter().map(|b| format!("{:02x}", b)).collect();
        info!(
            "frame {}: valid={} last={} data={}",
            self.driven, frame.valid, frame.last, hex
        );
    }
}

/// Nothing consumes the blocks here, so nothing ever asks to finish.
struct NoScheduler;

impl SimulationControl for NoScheduler {
    fn finish(&mut self) {}
}

fn run(cli: &Cli) -> Result<u64, FeederError> {
    let config = FeederConfig::with_block_size(cli.block_size)?;
    stream_file(&cli.path, config)
}

fn stream_file(path: &Path, config: FeederConfig) -> Result<u64, FeederError> {
    let interface = LoggingInterface { driven: 0 };
    let mut session = FeederSession::open(path, config, interface, NoScheduler)?;

    loop {
        let frame = session.get_input_data()?;
        if frame.last || !frame.valid {
            break;
        }
    }

    Ok(session.reader().blocks_read())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(blocks) => {
            println!("Streamed {} blocks from {}", blocks, cli.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
