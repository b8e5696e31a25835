//! Async packet stream over any byte stream.

use crate::config::CodecConfig;
use crate::core::codec::PacketCodec;
use crate::error::Result;
use crate::protocol::event::DecodedPacket;
use crate::protocol::pipeline::Pipeline;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::Framed;
use tracing::{debug, info, instrument};

/// Whole-packet reader and writer on top of a byte stream.
///
/// A framing error (bad magic, oversized packet) leaves the stream out of
/// sync, so the next read after one reports the stream as ended.
#[derive(Debug)]
pub struct FramedTransport<S> {
    inner: Framed<S, PacketCodec>,
}

impl<S> FramedTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self::with_codec(stream, PacketCodec::default())
    }

    pub fn with_config(stream: S, config: &CodecConfig) -> Self {
        Self::with_codec(stream, PacketCodec::from_config(config))
    }

    pub fn with_codec(stream: S, codec: PacketCodec) -> Self {
        Self {
            inner: Framed::new(stream, codec),
        }
    }

    /// Write one complete packet and flush.
    pub async fn send_packet(&mut self, packet: &[u8]) -> Result<()> {
        self.inner.send(packet).await
    }

    /// Next complete packet, or `None` once the stream has ended.
    pub async fn next_packet(&mut self) -> Option<Result<Bytes>> {
        self.inner.next().await
    }

    /// Read until `pipeline` accepts a packet.
    ///
    /// Packets the pipeline drops are skipped. Returns `Ok(None)` at end of
    /// stream and the framing error if the stream desynchronizes.
    pub async fn next_decoded(&mut self, pipeline: &Pipeline) -> Result<Option<DecodedPacket>> {
        while let Some(frame) = self.next_packet().await {
            let frame = frame.map_err(|e| {
                debug!(kind = e.kind(), error = %e, "framing error");
                e
            })?;
            if let Some(decoded) = pipeline.process(&frame) {
                return Ok(Some(decoded));
            }
        }
        Ok(None)
    }

    pub fn get_ref(&self) -> &S {
        self.inner.get_ref()
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl FramedTransport<TcpStream> {
    /// Open a TCP connection and frame it.
    #[instrument(skip(addr, config))]
    pub async fn connect<A: ToSocketAddrs>(addr: A, config: &CodecConfig) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        let peer = stream.peer_addr()?;
        info!(%peer, "connected");
        Ok(Self::with_config(stream, config))
    }
}
