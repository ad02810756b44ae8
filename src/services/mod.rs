mod route_probe;

pub use route_probe::{FALLBACK_ADDRESS, RouteProbeResolver};
