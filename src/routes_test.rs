use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn every_policy_route_has_a_router_path() {
    let paths: Vec<String> = generate_route_list(App).iter().map(|route| route.path().to_owned()).collect();
    for expected in ["/", "/login", "/dashboard", "/jobs", "/documents", "/clients", "/settings", "/profile"] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected} in {paths:?}");
    }
    assert!(paths.iter().any(|p| p.starts_with("/client-profile/")), "missing client-profile in {paths:?}");
}
