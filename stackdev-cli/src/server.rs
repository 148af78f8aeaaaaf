//! TCP front-end serving one shared stack device.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use embedded_io_adapters::tokio_1::FromTokio;
use embedded_io_async::{ErrorType, Read, ReadExactError, Write};
use log::{debug, info, warn};
use stackdev::{ELEMENT_SIZE, StackDevice, StreamError};
use tokio::net::{TcpListener, TcpStream};

use crate::protocol::{EINVAL, HEADER_LEN, Request, Response};

/// Accept connections forever, one task per connection.
pub async fn serve(listener: TcpListener, device: Arc<StackDevice>) -> Result<()> {
    info!("listening on {}", listener.local_addr()?);
    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;
        let device = Arc::clone(&device);
        tokio::spawn(async move {
            debug!("{} connected", peer);
            match handle_connection(&device, socket).await {
                Ok(()) => debug!("{} disconnected", peer),
                Err(e) => warn!("{} dropped: {:#}", peer, e),
            }
        });
    }
}

/// Read that counts the bytes it has taken from the inner reader.
struct Metered<'a, R> {
    inner: &'a mut R,
    taken: usize,
}

impl<R: ErrorType> ErrorType for Metered<'_, R> {
    type Error = R::Error;
}

impl<R: Read> Read for Metered<'_, R> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.inner.read(buf).await?;
        self.taken += n;
        Ok(n)
    }
}

async fn handle_connection(device: &StackDevice, socket: TcpStream) -> Result<()> {
    let peer: SocketAddr = socket.peer_addr()?;
    let (rd, wr) = socket.into_split();
    let mut rd = FromTokio::new(rd);
    let mut wr = FromTokio::new(wr);
    let mut stream = device.open();

    loop {
        let mut header = [0u8; HEADER_LEN];
        match rd.read_exact(&mut header).await {
            Ok(()) => {}
            Err(ReadExactError::UnexpectedEof) => return Ok(()),
            Err(ReadExactError::Other(e)) => return Err(e).context("reading request header"),
        }

        let request = match Request::decode(header) {
            Ok(request) => request,
            Err(e) => {
                warn!("{} sent {}", peer, e);
                wr.write_all(&Response::error(EINVAL.into()).encode()).await?;
                wr.flush().await?;
                return Ok(());
            }
        };
        debug!("{} -> {:?}", peer, request);

        match request {
            Request::Read(n) => {
                // Only the elements stored right now can be popped; anything
                // pushed after this snapshot is left for the next read.
                let live = stream.state().await.len;
                let limit = live
                    .saturating_mul(ELEMENT_SIZE)
                    .min(n as usize);
                let mut buf = vec![0u8; limit];
                match stream.read(&mut buf).await {
                    Ok(produced) => {
                        wr.write_all(&Response::ok(produced).encode()).await?;
                        wr.write_all(&buf[..produced]).await?;
                    }
                    Err(e) => wr.write_all(&Response::error(e.errno()).encode()).await?,
                }
            }
            Request::Write(n) => {
                let len = n as usize;
                let mut source = Metered {
                    inner: &mut rd,
                    taken: 0,
                };
                let response = match stream.write_from(len, &mut source).await {
                    Ok(consumed) => Response::ok(consumed),
                    Err(StreamError::Transport(e)) => {
                        return Err(e).context("reading write payload");
                    }
                    Err(StreamError::UnexpectedEof) => return Ok(()),
                    Err(e) => Response::error(e.errno()),
                };
                let leftover = len - source.taken;
                discard(&mut rd, leftover).await?;
                wr.write_all(&response.encode()).await?;
            }
            Request::SetCapacity(n) => {
                let response = match stream.set_capacity(n.into()).await {
                    Ok(()) => {
                        info!("{} set capacity to {}", peer, n);
                        Response::ok(0)
                    }
                    Err(e) => {
                        warn!("{} failed to set capacity to {}: {}", peer, n, e);
                        Response::error(e.errno())
                    }
                };
                wr.write_all(&response.encode()).await?;
            }
        }
        wr.flush().await?;
    }
}

/// Skip payload bytes that a short or failed write left unread.
async fn discard<R: Read>(source: &mut R, mut remaining: usize) -> Result<()>
where
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let mut scratch = [0u8; 256];
    while remaining > 0 {
        let want = remaining.min(scratch.len());
        match source.read_exact(&mut scratch[..want]).await {
            Ok(()) => remaining -= want,
            Err(ReadExactError::UnexpectedEof) => anyhow::bail!("payload ended early"),
            Err(ReadExactError::Other(e)) => return Err(e).context("discarding payload"),
        }
    }
    Ok(())
}
