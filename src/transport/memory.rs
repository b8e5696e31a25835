use crate::error::{ProtocolError, Result};
use crate::transport::Transport;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// One end of an in-process loopback link.
///
/// Buffers sent on one end are received, unchanged and in order, on the other.
#[derive(Debug)]
pub struct MemoryTransport {
    outgoing: UnboundedSender<Vec<u8>>,
    incoming: UnboundedReceiver<Vec<u8>>,
}

impl MemoryTransport {
    /// Two connected ends.
    pub fn pair() -> (Self, Self) {
        let (a_tx, a_rx) = unbounded_channel();
        let (b_tx, b_rx) = unbounded_channel();
        (
            Self {
                outgoing: a_tx,
                incoming: b_rx,
            },
            Self {
                outgoing: b_tx,
                incoming: a_rx,
            },
        )
    }

    /// Whether the peer end has been dropped.
    pub fn is_closed(&self) -> bool {
        self.outgoing.is_closed()
    }
}

impl Transport for MemoryTransport {
    fn receive(&mut self) -> Option<Vec<u8>> {
        self.incoming.try_recv().ok()
    }

    fn send(&mut self, packet: &[u8]) -> Result<()> {
        trace!(len = packet.len(), "memory transport send");
        self.outgoing
            .send(packet.to_vec())
            .map_err(|_| ProtocolError::TransportClosed)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_pair_delivers_in_order() {
        let (mut a, mut b) = MemoryTransport::pair();
        a.send(&[1, 2]).unwrap();
        a.send(&[3]).unwrap();
        b.send(&[9]).unwrap();

        assert_eq!(b.receive(), Some(vec![1, 2]));
        assert_eq!(b.receive(), Some(vec![3]));
        assert_eq!(b.receive(), None);
        assert_eq!(a.receive(), Some(vec![9]));
    }

    #[test]
    fn test_send_after_peer_dropped() {
        let (mut a, b) = MemoryTransport::pair();
        drop(b);
        assert!(a.is_closed());
        assert!(matches!(a.send(&[1]), Err(ProtocolError::TransportClosed)));
    }
}
