use hickory_server::ServerFuture;
use planeboard_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve UDP and TCP on `bind_addr` until the server fails or `shutdown` fires.
pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    tcp_timeout: Duration,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, tcp_timeout);

    info!(bind_address = %socket_addr, "DNS server ready");

    let cancelled = tokio::select! {
        result = server.block_until_done() => {
            result?;
            false
        }
        _ = shutdown.cancelled() => true,
    };

    if cancelled {
        info!("Shutting down DNS server");
        server.shutdown_gracefully().await?;
    }

    Ok(())
}
