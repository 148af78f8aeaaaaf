//! Client side of the wire protocol.

use anyhow::{Context, Result, anyhow};
use embedded_io_adapters::tokio_1::FromTokio;
use embedded_io_async::{Read, Write};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::protocol::{HEADER_LEN, Request, Response};

/// A connection to a running `stackdev serve`.
pub struct Client {
    io: FromTokio<TcpStream>,
}

impl Client {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let socket = TcpStream::connect(addr)
            .await
            .context("can't connect to stack device")?;
        socket.set_nodelay(true)?;
        Ok(Self {
            io: FromTokio::new(socket),
        })
    }

    /// Pop up to `len` bytes worth of elements.
    pub async fn read(&mut self, len: u32) -> Result<Vec<i32>> {
        let response = self.call(Request::Read(len), &[]).await?;
        if !response.is_ok() {
            return Err(anyhow!("read failed with status {}", response.status));
        }

        let mut payload = vec![0u8; response.count as usize];
        self.io
            .read_exact(&mut payload)
            .await
            .map_err(|e| anyhow!("reading payload: {:?}", e))?;
        Ok(payload
            .chunks_exact(4)
            .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    /// Push `values`, returning the server's response header.
    pub async fn write(&mut self, values: &[i32]) -> Result<Response> {
        let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        let len = u32::try_from(payload.len()).context("write too large")?;
        self.call(Request::Write(len), &payload).await
    }

    /// Issue the capacity-change control call.
    pub async fn set_capacity(&mut self, capacity: i32) -> Result<Response> {
        self.call(Request::SetCapacity(capacity), &[]).await
    }

    async fn call(&mut self, request: Request, payload: &[u8]) -> Result<Response> {
        self.io.write_all(&request.encode()).await?;
        self.io.write_all(payload).await?;
        self.io.flush().await?;

        let mut header = [0u8; HEADER_LEN];
        self.io
            .read_exact(&mut header)
            .await
            .map_err(|e| anyhow!("reading response: {:?}", e))?;
        Ok(Response::decode(header))
    }
}
