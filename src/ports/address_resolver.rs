use std::net::IpAddr;

/// Port for supplying a default local network address.
///
/// Used when the operator supplies no explicit address. Implementations are
/// infallible: when no real route can be determined they fall back to a
/// documented default instead of erroring, so resolution never aborts a run.
/// The value is advisory only; operator overrides always win.
pub trait AddressResolver {
    /// Best-effort address this host could be reached at on its primary
    /// active network interface.
    fn resolve(&self) -> IpAddr;
}
