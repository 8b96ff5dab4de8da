/// Resolves a formatted postal address into a `(lat, lng)` pair.
///
/// Implementations are best effort: any failure (network error,
/// no match, malformed response, timeout) results in `None`.
pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        (**self).resolve_address_lat_lng(address, region_hint)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        (**self).resolve_address_lat_lng(address, region_hint)
    }
}
