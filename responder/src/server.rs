use std::future::poll_fn;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::task::{Context, Poll};

use dns::{QueryHandler, Resolver, MAX_UDP_MESSAGE_SIZE};
use tokio::io::ReadBuf;
use tokio::net::UdpSocket;

/// The two datagram operations the serving loop needs.
pub trait DatagramSocket: Send + Sync + 'static {
    fn poll_recv_from(
        &self,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<SocketAddr>>;

    fn poll_send_to(
        &self,
        cx: &mut Context<'_>,
        buf: &[u8],
        target: SocketAddr,
    ) -> Poll<io::Result<usize>>;
}

impl DatagramSocket for UdpSocket {
    fn poll_recv_from(
        &self,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<SocketAddr>> {
        UdpSocket::poll_recv_from(self, cx, buf)
    }

    fn poll_send_to(
        &self,
        cx: &mut Context<'_>,
        buf: &[u8],
        target: SocketAddr,
    ) -> Poll<io::Result<usize>> {
        UdpSocket::poll_send_to(self, cx, buf, target)
    }
}

// Runs until the process is stopped; a failed receive only costs that datagram.
pub async fn serve<S, R>(sock: S, handler: QueryHandler<R>)
where
    S: DatagramSocket,
    R: Resolver + 'static,
{
    let sock = Arc::new(sock);
    let handler = Arc::new(handler);

    loop {
        let mut buf = [0u8; MAX_UDP_MESSAGE_SIZE];
        let mut read_buf = ReadBuf::new(&mut buf);
        let received = poll_fn(|cx| sock.poll_recv_from(cx, &mut read_buf)).await;

        let peer_addr = match received {
            Ok(peer_addr) => peer_addr,
            Err(e) => {
                tracing::warn!("failed to receive datagram: {}", e);
                continue;
            }
        };
        let len = read_buf.filled().len();
        tracing::debug!("received {} bytes from {}", len, peer_addr);

        let sock = Arc::clone(&sock);
        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            respond(&*sock, &handler, &buf[..len], peer_addr).await;
        });
    }
}

async fn respond<S: DatagramSocket, R: Resolver>(
    sock: &S,
    handler: &QueryHandler<R>,
    request: &[u8],
    peer_addr: SocketAddr,
) {
    let response = match handler.handle(request) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("dropping query from {}: {}", peer_addr, e);
            return;
        }
    };

    match poll_fn(|cx| sock.poll_send_to(cx, &response, peer_addr)).await {
        Ok(n) => tracing::debug!("sent {} bytes to {}", n, peer_addr),
        Err(e) => tracing::warn!("failed to send response to {}: {}", peer_addr, e),
    }
}
