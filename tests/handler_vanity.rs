mod common;

use axum_test::TestServer;
use vanity_url::routes::app_router;

fn server(setup: &common::TestSetup) -> TestServer {
    let state = common::create_test_state(setup);
    TestServer::new(app_router(state)).unwrap()
}

fn promo_setup() -> common::TestSetup {
    common::TestSetup {
        records: vec![
            common::record("/promo", "default", "https://example.com/landing"),
            common::record("/campaign", "default", "/en/campaign"),
            common::record("/shop-only", "shop", "https://shop.example.com/sale"),
            common::permanent_record("/old", "default", "https://example.com/new"),
            common::record("/empty", "default", ""),
        ],
        excludes: vec![("assets", "/assets/.*")],
        sites: vec![("shop.example.com", "shop")],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_redirect_external_link() {
    let server = server(&promo_setup());

    let response = server.get("/promo").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/landing");
}

#[tokio::test]
async fn test_redirect_appends_query_string() {
    let server = server(&promo_setup());

    let response = server.get("/promo").add_query_param("utm", "x").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/landing?utm=x"
    );
}

#[tokio::test]
async fn test_redirect_internal_link() {
    let server = server(&promo_setup());

    let response = server.get("/campaign").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/en/campaign");
}

#[tokio::test]
async fn test_permanent_redirect() {
    let server = server(&promo_setup());

    let response = server.get("/old").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/new");
}

#[tokio::test]
async fn test_excluded_path_not_found() {
    let mut setup = promo_setup();
    setup
        .records
        .push(common::record("/assets/logo.png", "default", "https://example.com"));
    let server = server(&setup);

    let response = server.get("/assets/logo.png").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let server = server(&promo_setup());

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/missing");
    assert_eq!(json["error"]["details"]["site"], "default");
}

#[tokio::test]
async fn test_empty_link_not_found() {
    let server = server(&promo_setup());

    server.get("/empty").await.assert_status_not_found();
}

#[tokio::test]
async fn test_site_scoping_by_host() {
    let server = server(&promo_setup());

    let shop = server
        .get("/shop-only")
        .add_header("Host", "shop.example.com")
        .await;
    assert_eq!(shop.status_code(), 302);
    assert_eq!(shop.header("location"), "https://shop.example.com/sale");

    // Default-site records are not visible on the shop site.
    let promo_on_shop = server
        .get("/promo")
        .add_header("Host", "shop.example.com")
        .await;
    promo_on_shop.assert_status_not_found();

    // Shop records are not visible on the default site.
    let shop_on_default = server
        .get("/shop-only")
        .add_header("Host", "www.example.com")
        .await;
    shop_on_default.assert_status_not_found();
}

#[tokio::test]
async fn test_percent_encoded_path_is_decoded() {
    let setup = common::TestSetup {
        records: vec![common::record("/grüße", "default", "https://example.com/de")],
        ..Default::default()
    };
    let server = server(&setup);

    let response = server.get("/gr%C3%BC%C3%9Fe").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/de");
}

#[tokio::test]
async fn test_context_path_mount_and_strip() {
    let setup = common::TestSetup {
        records: vec![common::record("/promo", "default", "/en/campaign")],
        context_path: "/site",
        link_extension: Some("html"),
        ..Default::default()
    };
    let server = server(&setup);

    let response = server.get("/site/promo").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/en/campaign.html");

    server.get("/promo").await.assert_status_not_found();
}

#[tokio::test]
async fn test_context_root_with_and_without_slash() {
    let setup = common::TestSetup {
        records: vec![common::record("/", "default", "https://example.com/home")],
        context_path: "/site",
        ..Default::default()
    };
    let server = server(&setup);

    for path in ["/site", "/site/"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), 302, "{path}");
        assert_eq!(response.header("location"), "https://example.com/home");
    }

    server.get("/sitemap").await.assert_status_not_found();
}

#[tokio::test]
async fn test_post_not_allowed() {
    let server = server(&promo_setup());

    let response = server.post("/promo").await;

    assert_eq!(response.status_code(), 405);
}
