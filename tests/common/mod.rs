#![allow(dead_code)]

use std::sync::Arc;
use vanity_url::application::mapping::{
    ContentLinkResolver, ExclusionPolicy, LinkResolver, SiteResolver, StaticExclusions,
    VanityUriMapper,
};
use vanity_url::domain::entities::{NewVanityRecord, RedirectKind};
use vanity_url::infrastructure::persistence::InMemoryVanityRepository;
use vanity_url::state::AppState;

pub fn record(vanity_url: &str, site: &str, link: &str) -> NewVanityRecord {
    NewVanityRecord {
        vanity_url: vanity_url.to_string(),
        site: site.to_string(),
        link: link.to_string(),
        redirect_kind: RedirectKind::Redirect,
    }
}

pub fn permanent_record(vanity_url: &str, site: &str, link: &str) -> NewVanityRecord {
    NewVanityRecord {
        redirect_kind: RedirectKind::Permanent,
        ..record(vanity_url, site, link)
    }
}

/// Link resolver that maps content paths through a fixed table.
pub struct TableLinkResolver(pub Vec<(&'static str, &'static str)>);

impl LinkResolver for TableLinkResolver {
    fn link(&self, content_path: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(from, _)| *from == content_path)
            .map(|(_, to)| to.to_string())
    }
}

pub fn create_mapper(
    records: Vec<NewVanityRecord>,
    excludes: &[(&str, &str)],
    link_resolver: Arc<dyn LinkResolver>,
    context_path: &str,
) -> VanityUriMapper {
    let repository = Arc::new(InMemoryVanityRepository::with_records(records));
    let policy = ExclusionPolicy::compile(excludes.iter().copied()).unwrap();

    VanityUriMapper::new(
        repository,
        link_resolver,
        Arc::new(StaticExclusions::new(policy)),
        context_path,
    )
}

pub struct TestSetup {
    pub records: Vec<NewVanityRecord>,
    pub excludes: Vec<(&'static str, &'static str)>,
    pub sites: Vec<(&'static str, &'static str)>,
    pub context_path: &'static str,
    pub link_extension: Option<&'static str>,
}

impl Default for TestSetup {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            excludes: Vec::new(),
            sites: Vec::new(),
            context_path: "",
            link_extension: None,
        }
    }
}

pub fn create_test_state(setup: &TestSetup) -> AppState {
    let repository = Arc::new(InMemoryVanityRepository::with_records(
        setup.records.clone(),
    ));
    let policy = ExclusionPolicy::compile(setup.excludes.iter().copied()).unwrap();
    let exclusions = Arc::new(StaticExclusions::new(policy));
    let link_resolver = Arc::new(ContentLinkResolver::new(
        setup.context_path,
        setup.link_extension,
    ));

    let mapper = Arc::new(VanityUriMapper::new(
        repository.clone(),
        link_resolver,
        exclusions.clone(),
        setup.context_path,
    ));

    AppState::new(
        mapper,
        Arc::new(SiteResolver::new(setup.sites.iter().copied())),
        repository,
        exclusions,
        setup.context_path,
    )
}
