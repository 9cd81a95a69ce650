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


// Helper sources and builders shared by the tests
#[doc(hidden)]
pub(crate) mod helpers {
    use std::io::{self, ErrorKind, Read};

    /// Bytes `0, 1, 2, ...` wrapping at 256.
    pub fn sequential_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 256) as u8).collect()
    }

    /// A source that returns at most one byte per read call.
    pub struct OneByteAtATime<R: Read>(pub R);

    impl<R: Read> Read for OneByteAtATime<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.0.read(&mut buf[..1])
        }
    }

    /// A source that reports `Interrupted` before every successful read.
    pub struct Interrupting<R: Read> {
        pub inner: R,
        pub interrupt_next: bool,
    }

    impl<R: Read> Interrupting<R> {
        pub fn new(inner: R) -> Self {
            Self {
                inner,
                interrupt_next: true,
            }
        }
    }

    impl<R: Read> Read for Interrupting<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(io::Error::new(ErrorKind::Interrupted, "interrupted"));
            }
            self.interrupt_next = true;
            self.inner.read(buf)
        }
    }

    /// A source that serves `good` bytes and then fails every read.
    pub struct FailAfter {
        pub good: Vec<u8>,
        pub offset: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.offset >= self.good.len() {
                return Err(io::Error::new(ErrorKind::Other, "disk on fire"));
            }
            let n = buf.len().min(self.good.len() - self.offset);
            buf[..n].copy_from_slice(&self.good[self.offset..self.offset + n]);
            self.offset += n;
            Ok(n)
        }
    }
}
