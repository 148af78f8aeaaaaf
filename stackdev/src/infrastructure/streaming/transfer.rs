//! Element transfers across an external byte endpoint.
//!
//! These mirror [`StackStream::read`] and [`StackStream::write`], but copy
//! each element to or from a caller-supplied `embedded_io_async` endpoint
//! instead of a slice. Endpoint failures surface as
//! [`StreamError::Transport`].

use crate::{
    domain::{ELEMENT_SIZE, StackError, decode_element, encode_element},
    infrastructure::streaming::{StackStream, StreamError},
};
use embedded_io_async::{Read, ReadExactError, Write};

impl StackStream<'_> {
    /// Pop up to `len / 4` elements and write their bytes to `sink`.
    ///
    /// Follows the same empty and short-read rules as [`read`](Self::read).
    /// If `sink` fails, the element that was being copied has already been
    /// popped and is lost.
    pub async fn read_into<W: Write>(
        &mut self,
        len: usize,
        sink: &mut W,
    ) -> Result<usize, StreamError<W::Error>> {
        let mut produced = 0;

        while len - produced >= ELEMENT_SIZE {
            let value = match self.device().pop().await {
                Ok(value) => value,
                Err(StackError::StackEmpty) => break,
                Err(e) => return Err(e.into()),
            };
            sink.write_all(&encode_element(value)).await.map_err(|e| {
                warn!("sink failed after {} bytes, element dropped", produced);
                StreamError::Transport(e)
            })?;
            produced += ELEMENT_SIZE;
        }

        debug!("read {} of {} bytes into sink", produced, len);
        Ok(produced)
    }

    /// Read `len` bytes from `source` and push them as elements.
    ///
    /// Follows the same padding and full-stack rules as [`write`](Self::write).
    /// A source failure is reported even if some elements were already
    /// pushed; those are not rolled back.
    pub async fn write_from<R: Read>(
        &mut self,
        len: usize,
        source: &mut R,
    ) -> Result<usize, StreamError<R::Error>> {
        let mut consumed = 0;

        while consumed < len {
            let want = (len - consumed).min(ELEMENT_SIZE);
            let mut chunk = [0u8; ELEMENT_SIZE];
            source
                .read_exact(&mut chunk[..want])
                .await
                .map_err(|e| {
                    warn!("source failed after {} bytes", consumed);
                    match e {
                        ReadExactError::UnexpectedEof => StreamError::UnexpectedEof,
                        ReadExactError::Other(e) => StreamError::Transport(e),
                    }
                })?;

            match self.device().push(decode_element(&chunk[..want])).await {
                Ok(()) => consumed += want,
                Err(StackError::StackFull) if consumed > 0 => {
                    debug!("short write, stack full after {} bytes", consumed);
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        debug!("wrote {} of {} bytes from source", consumed, len);
        Ok(consumed)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Capacity, StackConfig};
    use crate::{StackDevice, StackError, StreamError};
    use embedded_io_async::{ErrorKind, ErrorType, Read, Write};
    use futures::executor::block_on;

    /// Sink that accepts `budget` bytes and then fails.
    struct LimitedSink {
        data: Vec<u8>,
        budget: usize,
    }

    impl ErrorType for LimitedSink {
        type Error = ErrorKind;
    }

    impl Write for LimitedSink {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if self.budget == 0 {
                return Err(ErrorKind::BrokenPipe);
            }
            let n = buf.len().min(self.budget);
            self.data.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Source that yields `data` and then fails instead of reporting EOF.
    struct FaultySource {
        data: Vec<u8>,
        pos: usize,
    }

    impl ErrorType for FaultySource {
        type Error = ErrorKind;
    }

    impl Read for FaultySource {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if self.pos == self.data.len() {
                return Err(ErrorKind::Other);
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    fn device(slots: usize) -> StackDevice {
        StackDevice::new(StackConfig::new(Capacity::new(slots))).unwrap()
    }

    #[test]
    fn test_read_into_sink() {
        let device = device(4);
        let mut stream = device.open();
        let mut sink = LimitedSink {
            data: Vec::new(),
            budget: usize::MAX,
        };
        block_on(async {
            device.push(1).await.unwrap();
            device.push(2).await.unwrap();
            assert_eq!(stream.read_into(11, &mut sink).await, Ok(8));
        });
        let expected: Vec<u8> = [2i32, 1].iter().flat_map(|v| v.to_ne_bytes()).collect();
        assert_eq!(sink.data, expected);
    }

    #[test]
    fn test_read_into_sink_fault_drops_element() {
        let device = device(4);
        let mut stream = device.open();
        let mut sink = LimitedSink {
            data: Vec::new(),
            budget: 4,
        };
        block_on(async {
            for v in [1, 2, 3] {
                device.push(v).await.unwrap();
            }
            assert_eq!(
                stream.read_into(12, &mut sink).await,
                Err(StreamError::Transport(ErrorKind::BrokenPipe))
            );
            // 3 reached the sink, 2 was popped and lost, 1 remains.
            assert_eq!(device.state().await.len, 1);
            assert_eq!(device.pop().await, Ok(1));
        });
    }

    #[test]
    fn test_write_from_source_with_padding() {
        let device = device(4);
        let mut stream = device.open();
        let mut source = FaultySource {
            data: vec![9, 0, 0, 0, 0xFF],
            pos: 0,
        };
        block_on(async {
            assert_eq!(stream.write_from(5, &mut source).await, Ok(5));
            assert_eq!(device.pop().await, Ok(i32::from_ne_bytes([0xFF, 0, 0, 0])));
            assert_eq!(device.pop().await, Ok(i32::from_ne_bytes([9, 0, 0, 0])));
        });
    }

    #[test]
    fn test_write_from_source_fault_keeps_pushed() {
        let device = device(4);
        let mut stream = device.open();
        let mut source = FaultySource {
            data: 5i32.to_ne_bytes().to_vec(),
            pos: 0,
        };
        block_on(async {
            assert_eq!(
                stream.write_from(8, &mut source).await,
                Err(StreamError::Transport(ErrorKind::Other))
            );
            assert_eq!(device.pop().await, Ok(5));
        });
    }

    #[test]
    fn test_write_from_source_ending_early() {
        let device = device(4);
        let mut stream = device.open();
        let bytes = 6i32.to_ne_bytes();
        let mut source: &[u8] = &bytes;
        block_on(async {
            assert_eq!(
                stream.write_from(8, &mut source).await,
                Err(StreamError::UnexpectedEof)
            );
            assert_eq!(StreamError::<ErrorKind>::UnexpectedEof.errno(), 14);
            assert_eq!(device.pop().await, Ok(6));
            assert_eq!(device.pop().await, Err(StackError::StackEmpty));
        });
    }

    #[test]
    fn test_write_from_full_rules() {
        let device = device(1);
        let mut stream = device.open();
        let bytes: Vec<u8> = [1i32, 2, 3].iter().flat_map(|v| v.to_ne_bytes()).collect();
        block_on(async {
            let mut source = FaultySource {
                data: bytes.clone(),
                pos: 0,
            };
            assert_eq!(stream.write_from(12, &mut source).await, Ok(4));

            let mut source = FaultySource { data: bytes, pos: 0 };
            assert_eq!(
                stream.write_from(12, &mut source).await,
                Err(StreamError::Stack(StackError::StackFull))
            );
        });
    }
}
