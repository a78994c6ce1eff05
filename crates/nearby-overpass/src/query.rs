use nearby_core::ports::PoiQuery;

/// Render a query as Overpass QL.
///
/// Nodes tagged with the query's amenity within the radius, followed by the
/// recursion and skeleton output the public endpoint expects. Only elements
/// with coordinates survive parsing, so the skeleton part is harmless.
pub fn build_query(query: &PoiQuery) -> String {
    format!(
        "[out:json];(node[\"amenity\"=\"{}\"](around:{},{},{}););out body;>;out skel qt;",
        query.amenity,
        query.radius_meters,
        query.origin.lat(),
        query.origin.lng()
    )
}
