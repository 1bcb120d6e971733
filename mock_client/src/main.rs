use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use argh::FromArgs;
use log::{info, warn};
use tokio::net::UdpSocket;
use tokio::time::timeout;

fn default_server() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5353))
}

#[derive(Debug, FromArgs)]
#[argh(description = "send one A query to a responder and print the answer")]
struct CliArgs {
    #[argh(
        option,
        description = "responder address, default: '127.0.0.1:5353'",
        default = "default_server()"
    )]
    server: SocketAddr,

    #[argh(
        option,
        description = "transaction id, default: 53687",
        default = "209 * 256 + 183"
    )]
    id: u16,

    #[argh(positional, description = "domain name to query")]
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();

    let args: CliArgs = argh::from_env();

    // 1. sends the query
    let request = dns::encode_request(args.id, &args.name)?;
    let sock = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)).await?;
    sock.send_to(&request, args.server).await?;
    info!("sent {} bytes to {}: {:?}", request.len(), args.server, request);

    // 2. receives the response
    let mut buf = [0u8; dns::MAX_UDP_MESSAGE_SIZE];
    let n = match timeout(Duration::from_secs(3), sock.recv(&mut buf)).await {
        Ok(n) => n?,
        Err(_) => {
            warn!("no response from {} within 3s", args.server);
            return Ok(());
        }
    };
    info!("received {} bytes: {:?}", n, &buf[..n]);

    let resp = dns::decode_response(&buf[..n])?;
    if resp.id() != args.id {
        warn!("response id {} does not match query id {}", resp.id(), args.id);
    }

    // 3. prints the answers
    if resp.answers().is_empty() {
        info!("{}: no answer", args.name);
    }
    for record in resp.answers() {
        let (domain, ttl, rtype) = (record.domain(), record.ttl(), record.rtype());
        match record.ipv4_address() {
            Some(addr) => info!("{}\t{}\t{}\t{}", domain, ttl, rtype, addr),
            None => info!("{}\t{}\t{}\t{:?}", domain, ttl, rtype, record.rdata()),
        }
    }

    Ok(())
}
