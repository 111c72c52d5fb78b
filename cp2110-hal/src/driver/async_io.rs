//! embedded_io_async trait implementations for the CP2110 UART.
//!
//! These run the blocking implementations inline; hidapi has no async interface.
use embedded_io::{Read as BlockingRead, Write as BlockingWrite};
use embedded_io_async::{Read as AsyncRead, Write as AsyncWrite};

use super::CP2110;
use crate::transport::HidTransport;

impl<T: HidTransport> AsyncRead for CP2110<T> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        BlockingRead::read(self, buf)
    }
}

impl<T: HidTransport> AsyncWrite for CP2110<T> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        BlockingWrite::write(self, buf)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        BlockingWrite::flush(self)
    }
}
