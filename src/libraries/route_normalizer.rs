use crate::models::{CoordinateOrder, NoRoutesError, NormalizedRoute, RawRoute};

/// Reshape a provider's multi-route payload into canonical routes.
///
/// Provider order is preserved and the first route is the provider's
/// preferred one; every other route is flagged as an alternative. Duration
/// and distance pass through untouched — the provider's road-network-aware
/// values are the quantity the caller wants, not a straight-line
/// recomputation.
pub fn normalize(
    raw_routes: &[RawRoute],
    order: CoordinateOrder,
) -> Result<Vec<NormalizedRoute>, NoRoutesError> {
    if raw_routes.is_empty() {
        return Err(NoRoutesError);
    }

    Ok(raw_routes
        .iter()
        .enumerate()
        .map(|(index, raw)| NormalizedRoute {
            path: raw
                .coordinates
                .iter()
                .map(|pair| order.to_coordinate(*pair))
                .collect(),
            duration_seconds: raw.duration_seconds,
            distance_meters: raw.distance_meters,
            is_alternative: index > 0,
        })
        .collect())
}
