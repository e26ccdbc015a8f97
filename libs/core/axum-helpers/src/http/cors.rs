use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Any origin, method and header is accepted. The products service sits
/// behind the cluster ingress and is called from browser front-ends on other
/// origins.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
