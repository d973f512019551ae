//! Incremental digest accumulators

use sha2::Digest;
use std::io;

/// One running digest computation.
///
/// `feed` reports how many bytes were accepted. Anything other than the full
/// chunk is treated by the caller as a failed write.
pub trait Accumulator: Send {
    fn feed(&mut self, data: &[u8]) -> io::Result<usize>;

    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Accumulator backed by a RustCrypto digest.
pub struct DigestAccumulator<D>(D);

impl<D> DigestAccumulator<D> {
    pub fn new(digest: D) -> Self {
        Self(digest)
    }
}

impl<D> Accumulator for DigestAccumulator<D>
where
    D: Digest + io::Write + Send,
{
    fn feed(&mut self, data: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.0, data)
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }
}
