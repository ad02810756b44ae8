//! Default-address discovery via a routing-table probe.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use crate::ports::AddressResolver;

/// Address returned when no outbound route can be determined.
pub const FALLBACK_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Well-known external endpoint used to select an outbound route. It never
/// needs to be reachable: `connect` on a UDP socket only fixes the local
/// endpoint according to the routing table, no datagram is sent.
const PROBE_TARGET: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Resolves the host's outward-facing address by asking the routing table
/// which local endpoint it would pick for external traffic.
#[derive(Debug, Default)]
pub struct RouteProbeResolver;

impl RouteProbeResolver {
    pub fn new() -> Self {
        Self
    }

    /// The probe socket lives only for the duration of this call and is
    /// released on every exit path when it drops.
    fn probe(&self) -> Option<IpAddr> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
        socket.connect(PROBE_TARGET).ok()?;
        let local = socket.local_addr().ok()?;
        if local.ip().is_unspecified() { None } else { Some(local.ip()) }
    }
}

impl AddressResolver for RouteProbeResolver {
    fn resolve(&self) -> IpAddr {
        self.probe().unwrap_or(FALLBACK_ADDRESS)
    }
}
