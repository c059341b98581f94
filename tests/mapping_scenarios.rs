mod common;

use std::sync::Arc;
use vanity_url::application::mapping::{ContentLinkResolver, SiteContext, UriMapping};

fn campaign_resolver() -> Arc<common::TableLinkResolver> {
    Arc::new(common::TableLinkResolver(vec![(
        "/en/campaign",
        "/en/campaign-2024",
    )]))
}

#[tokio::test]
async fn test_excluded_asset_path() {
    let mapper = common::create_mapper(
        vec![common::record("/assets/logo.png", "default", "https://example.com")],
        &[("assets", "/assets/.*")],
        Arc::new(ContentLinkResolver::default()),
        "",
    );

    let result = mapper
        .map_uri("/assets/logo.png", None, &SiteContext::default())
        .await;

    assert!(result.is_none());
}

#[tokio::test]
async fn test_external_promo_link() {
    let mapper = common::create_mapper(
        vec![common::record("/promo", "default", "https://example.com/landing")],
        &[],
        campaign_resolver(),
        "",
    );

    let result = mapper
        .map_uri("/promo", None, &SiteContext::default())
        .await
        .unwrap();

    assert_eq!(result.to_uri, "redirect:https://example.com/landing");
    assert_eq!(result.level, 6);
}

#[tokio::test]
async fn test_internal_promo_link_with_query() {
    let mapper = common::create_mapper(
        vec![common::record("/promo", "default", "/en/campaign")],
        &[],
        campaign_resolver(),
        "",
    );

    let result = mapper
        .map_uri("/promo", Some("utm=x"), &SiteContext::default())
        .await
        .unwrap();

    assert_eq!(result.to_uri, "redirect:/en/campaign-2024?utm=x");
    assert_eq!(result.level, 6);
}

#[tokio::test]
async fn test_missing_record() {
    let mapper = common::create_mapper(vec![], &[], campaign_resolver(), "");

    assert!(
        mapper
            .map_uri("/missing", None, &SiteContext::default())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_strict_site_scoping() {
    let mapper = common::create_mapper(
        vec![common::record("/promo", "default", "https://example.com/landing")],
        &[],
        campaign_resolver(),
        "",
    );

    let result = mapper
        .map_uri("/promo", None, &SiteContext::new("shop"))
        .await;

    assert!(result.is_none());
}

#[tokio::test]
async fn test_first_record_wins_on_duplicates() {
    let mapper = common::create_mapper(
        vec![
            common::record("/dup", "default", "https://first.example.com"),
            common::record("/dup", "default", "https://second.example.com"),
        ],
        &[],
        campaign_resolver(),
        "",
    );

    let result = mapper
        .map_uri("/dup", None, &SiteContext::default())
        .await
        .unwrap();

    assert_eq!(result.to_uri, "redirect:https://first.example.com");
}

#[tokio::test]
async fn test_level_tracks_path_length() {
    let mapper = common::create_mapper(
        vec![
            common::record("/a", "default", "https://example.com/a"),
            common::record("/a/longer/path", "default", "https://example.com/b"),
        ],
        &[],
        campaign_resolver(),
        "",
    );
    let site = SiteContext::default();

    let short = mapper.map_uri("/a", None, &site).await.unwrap();
    let long = mapper.map_uri("/a/longer/path", None, &site).await.unwrap();

    assert_eq!(short.level, 2);
    assert_eq!(long.level, 14);
    assert!(long.level > short.level);
}
