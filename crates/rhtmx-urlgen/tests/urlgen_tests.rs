//! Integration tests for rhtmx-urlgen
//!
//! Tests are organized by feature area and cover:
//! - Single-template scenarios
//! - Placeholders, optional segments and query-string fallback
//! - Constraints
//! - Table order
//! - Loading configuration from JSON, TOML and bootstrap scripts

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rhtmx_urlgen::*;
use rstest::rstest;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_manager(name: &str) -> RouteManager {
    RouteManager::from_config(RouteConfig::from_file(&fixture(name)).unwrap())
}

fn single(template: RouteTemplate) -> RouteManager {
    RouteManager::new("/", RouteTable::from_templates(vec![template]))
}

// ============================================================================
// Single-template scenarios
// ============================================================================

#[test]
fn test_home_page_scenario() {
    let manager = single(
        RouteTemplate::new("{language}/HomePage")
            .with_default("controller", "SearchEngine")
            .with_default("page", "HomePage")
            .with_default("action", "Index")
            .with_optional("topcountries"),
    );

    assert_eq!(
        manager.route(&RouteValues::from([("language", "en")])).unwrap(),
        "/en/HomePage"
    );
}

#[test]
fn test_cache_scenario() {
    let manager = single(RouteTemplate::new("cache/{action}/{id}").with_default("controller", "Cache"));

    assert_eq!(
        manager
            .route(&RouteValues::from([("action", "Flush"), ("id", "42")]))
            .unwrap(),
        "/cache/Flush/42"
    );
}

#[test]
fn test_search_scenario() {
    let manager = single(
        RouteTemplate::new("{language}/search")
            .with_default("action", "Search")
            .with_default("controller", "SearchEngine")
            .with_default("page", "SearchResultNew")
            .with_default("searchsubgroupname", "World"),
    );

    assert_eq!(
        manager
            .route(&RouteValues::from([("language", "en"), ("sort", "price")]))
            .unwrap(),
        "/en/search?sort=price"
    );
}

#[test]
fn test_constraint_is_a_prefix_match() {
    // `^([0-9]+)` only anchors the start: "123extra" passes.
    let route = Route::new(RouteTemplate::new("item/{id}").with_constraint("id", "[0-9]+"));

    assert_eq!(route.build(&RouteValues::from([("id", "abc")])), None);
    assert_eq!(
        route.build(&RouteValues::from([("id", "123extra")])),
        Some("item/123extra".to_string())
    );
}

// ============================================================================
// Template properties
// ============================================================================

#[rstest]
#[case("en/contact")]
#[case("Account/CreateProfile")]
#[case("de/immobilien-inserate/immobilien-von-privat")]
#[case("")]
fn test_static_template_builds_unchanged(#[case] url: &str) {
    let route = Route::new(RouteTemplate::new(url));
    assert_eq!(route.build(&RouteValues::new()), Some(url.to_string()));
}

#[rstest]
#[case("translations/{locale}", &[("locale", "pt")], "translations/pt")]
#[case(
    "{language}/SearchEngine/MarkSearchChangesAsRead/{type}/{id}",
    &[("language", "en"), ("type", "alert"), ("id", "7")],
    "en/SearchEngine/MarkSearchChangesAsRead/alert/7"
)]
#[case(
    "cache/content/{portalid}/{name}/{language}/{localizedName}",
    &[("portalId", "3"), ("name", "faq"), ("language", "fr"), ("localizedName", "questions")],
    "cache/content/3/faq/fr/questions"
)]
fn test_all_placeholders_supplied(
    #[case] url: &str,
    #[case] values: &[(&str, &str)],
    #[case] expected: &str,
) {
    let route = Route::new(RouteTemplate::new(url));
    let values: RouteValues = values.iter().copied().collect();

    let built = route.build(&values).unwrap();
    assert_eq!(built, expected);
    assert!(!built.contains('{') && !built.contains('}'));
}

#[rstest]
#[case("translations/{locale}", &[])]
#[case("cache/{action}/{id}", &[("action", "Flush")])]
#[case("cache/{action}/{id}", &[("id", "1")])]
fn test_missing_required_placeholder(#[case] url: &str, #[case] values: &[(&str, &str)]) {
    let route = Route::new(RouteTemplate::new(url));
    let values: RouteValues = values.iter().copied().collect();
    assert_eq!(route.build(&values), None);
}

#[rstest]
#[case("{language}/search/{sorting}", "en/search")]
#[case("{language}/{sorting}/search", "en/search")]
#[case("{language}/search/{sorting}/", "en/search/")]
fn test_optional_segment_trimmed(#[case] url: &str, #[case] expected: &str) {
    let route = Route::new(RouteTemplate::new(url).with_optional("sorting"));
    let built = route.build(&RouteValues::from([("language", "en")])).unwrap();

    assert_eq!(built, expected);
    assert!(!built.contains("//"));
}

#[test]
fn test_optional_segment_used_when_supplied() {
    let route = Route::new(RouteTemplate::new("{language}/search/{sorting}").with_optional("sorting"));
    assert_eq!(
        route.build(&RouteValues::from([("language", "en"), ("sorting", "date")])),
        Some("en/search/date".to_string())
    );
}

#[test]
fn test_extra_keys_in_insertion_order() {
    let route = Route::new(RouteTemplate::new("{language}/search"));
    let values = RouteValues::new()
        .with("zoom", 4)
        .with("language", "en")
        .with("q", "casa & jardín")
        .with("new", true);

    assert_eq!(
        route.build(&values),
        Some("en/search?zoom=4&q=casa%20%26%20jard%C3%ADn&new=true".to_string())
    );
}

#[test]
fn test_extra_key_case_is_kept_in_query() {
    let route = Route::new(RouteTemplate::new("{language}/search"));
    assert_eq!(
        route.build(&RouteValues::from([("Language", "en"), ("SortOrder", "Asc")])),
        Some("en/search?SortOrder=Asc".to_string())
    );
}

#[test]
fn test_apostrophes_and_parentheses_stay_readable() {
    let route = Route::new(RouteTemplate::new("x/{v}"));
    let values = RouteValues::from([("v", "it's (new)!*"), ("q", "a'b")]);

    assert_eq!(
        route.build(&values),
        Some("x/it's%20(new)!*?q=a'b".to_string())
    );
}

#[test]
fn test_empty_placeholder_value_builds_empty_url() {
    // An empty rendering is still a match and resolves to the base URL.
    let route = Route::new(RouteTemplate::new("{a}"));
    assert_eq!(route.build(&RouteValues::from([("a", "")])), Some(String::new()));

    let manager = single(RouteTemplate::new("{a}"));
    assert_eq!(manager.route(&RouteValues::from([("a", "")])).unwrap(), "/");
}

#[test]
fn test_empty_url_beats_later_routes() {
    let manager = RouteManager::new(
        "/",
        RouteTable::from_templates(vec![
            RouteTemplate::new("{a}").with_optional("a"),
            RouteTemplate::new("fallback"),
        ]),
    );
    assert_eq!(manager.route(&RouteValues::new()).unwrap(), "/");
}

// ============================================================================
// Table order
// ============================================================================

#[test]
fn test_first_matching_route_wins() {
    let manager = RouteManager::new(
        "/",
        RouteTable::from_templates(vec![
            RouteTemplate::new("{language}/search"),
            RouteTemplate::new("{language}/search/{sorting}"),
        ]),
    );

    // The second route could carry `sorting` in the path, but the first one
    // builds (with a query string) and wins.
    assert_eq!(
        manager
            .route(&RouteValues::from([("language", "en"), ("sorting", "date")]))
            .unwrap(),
        "/en/search?sorting=date"
    );
}

#[test]
fn test_fixture_first_match_uses_defaults() {
    // The agency route defaults every placeholder, so it matches bare language values.
    let manager = fixture_manager("routes.json");
    assert_eq!(
        manager.route(&RouteValues::from([("language", "en")])).unwrap(),
        "/en/agency/agency/00000000-0000-0000-0000-000000000000"
    );
}

// ============================================================================
// Fixture configuration
// ============================================================================

#[rstest]
#[case("Contact", "Index", &[], "/en/contact")]
#[case("Translations", "Index", &[("locale", "pt")], "/translations/pt")]
#[case("Cache", "Flush", &[("id", "42")], "/cache/Flush/42")]
#[case("Cache", "Flush", &[("id", "abc")], "/cache/Flush?id=abc")]
#[case("Cache", "Flush", &[], "/cache/Flush")]
#[case(
    "SearchEngine",
    "AutoCompleteLocationsKendo",
    &[("language", "en"), ("id", "juntas")],
    "/en/SearchEngine/AutoCompleteLocationsKendo/juntas/10"
)]
#[case(
    "SearchEngine",
    "AutoCompleteLocationsKendo",
    &[("language", "en"), ("id", "juntas"), ("count", "25")],
    "/en/SearchEngine/AutoCompleteLocationsKendo/juntas/25"
)]
#[case("SearchEngine", "Index", &[("language", "en")], "/en/HomePage")]
#[case("SearchEngine", "Search", &[("language", "en"), ("sort", "price")], "/en/search?sort=price")]
#[case("SearchEngine", "Search", &[("language", "en"), ("sorting", "date")], "/en/search/date")]
#[case(
    "SearchEngine",
    "InAgency",
    &[("agencyPrettyName", "casa-tica"), ("businessUnitId", "1b4e28ba-2fa1-11d2-883f-0016d3cca427")],
    "/en/agency/casa-tica/1b4e28ba-2fa1-11d2-883f-0016d3cca427"
)]
#[case(
    "SearchEngine",
    "Search",
    &[("language", "en"), ("searchSubGroupName", "Europe")],
    "/SearchEngine/Search?language=en&searchSubGroupName=Europe"
)]
#[case("Account", "Login", &[], "/Account/Login")]
fn test_fixture_actions(
    #[case] controller: &str,
    #[case] action: &str,
    #[case] values: &[(&str, &str)],
    #[case] expected: &str,
) {
    let manager = fixture_manager("routes.json");
    let values: RouteValues = values.iter().copied().collect();

    assert_eq!(manager.action(controller, action, Some(values)).unwrap(), expected);
}

#[test]
fn test_fixture_constraints_compile() {
    assert!(fixture_manager("routes.json").precompile().is_ok());
}

#[test]
fn test_toml_fixture() {
    let manager = fixture_manager("routes.toml");

    assert_eq!(manager.routes().len(), 2);
    assert_eq!(
        manager
            .route(&RouteValues::from([("action", "Flush"), ("id", "42")]))
            .unwrap(),
        "/cache/Flush/42"
    );
    assert_eq!(
        manager.route(&RouteValues::from([("language", "en")])).unwrap(),
        "/en/HomePage"
    );
}

#[test]
fn test_toml_fixture_no_match() {
    let manager = fixture_manager("routes.toml");
    let err = manager.route(&RouteValues::new()).unwrap_err();
    assert!(matches!(err, UrlGenError::NoRouteMatched { .. }));
}

#[test]
fn test_bootstrap_script_fixture() {
    let manager = fixture_manager("bootstrap.js");

    assert_eq!(manager.base_url(), "/");
    assert_eq!(manager.routes().len(), 9);
    assert_eq!(manager.routes()[0].url(), "pt/agencia/{agencyPrettyName}/{businessUnitId}");
    assert!(manager.precompile().is_ok());
}

#[test]
fn test_bootstrap_language_only_hits_agency_route() {
    // The pt agency route pins language=pt; the en one fills both
    // placeholders from defaults, the empty agency name leaving `//`.
    let manager = fixture_manager("bootstrap.js");
    assert_eq!(
        manager.route(&RouteValues::from([("language", "en")])).unwrap(),
        "/en/agency//00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn test_bootstrap_earlier_route_without_id_wins() {
    // `cache/{action}` is listed before `cache/{action}/{id}`.
    let manager = fixture_manager("bootstrap.js");
    assert_eq!(
        manager
            .action("Cache", "Flush", Some(RouteValues::from([("id", "42")])))
            .unwrap(),
        "/cache/Flush?id=42"
    );
}

#[rstest]
#[case(
    "HtmlContent",
    "Index",
    &[("language", "de"), ("somepageid", "immobilien-von-privat")],
    "/de/immobilien-inserate/immobilien-von-privat"
)]
#[case("HtmlContent", "Index", &[("somePageId", "TestStaticPage")], "/en/TestStaticPage")]
#[case("Account", "GetTranslations", &[("locale", "de")], "/translations/de")]
#[case(
    "SearchEngine",
    "AutoCompleteLocationsKendo",
    &[("language", "en"), ("id", "juntas")],
    "/en/SearchEngine/AutoCompleteLocationsKendo/juntas/10"
)]
#[case("SearchEngine", "Index", &[("language", "fr")], "/fr")]
#[case(
    "SearchEngine",
    "InAgency",
    &[("language", "pt"), ("agencyPrettyName", "casa-d'ouro"), ("businessUnitId", "42")],
    "/pt/agencia/casa-d'ouro/42"
)]
fn test_bootstrap_actions(
    #[case] controller: &str,
    #[case] action: &str,
    #[case] values: &[(&str, &str)],
    #[case] expected: &str,
) {
    let manager = fixture_manager("bootstrap.js");
    let values: RouteValues = values.iter().copied().collect();

    assert_eq!(manager.action(controller, action, Some(values)).unwrap(), expected);
}

#[test]
fn test_bootstrap_guard_without_placeholder_fails() {
    let manager = fixture_manager("bootstrap.js");
    let err = manager
        .action(
            "SearchEngine",
            "Index",
            Some(RouteValues::from([("language", "en"), ("searchGroupName", "Rent")])),
        )
        .unwrap_err();
    assert!(matches!(err, UrlGenError::NoRouteMatched { .. }));
}

#[test]
fn test_missing_config_file() {
    let err = RouteConfig::from_file(&fixture("routes.yaml")).unwrap_err();
    assert!(matches!(err, UrlGenError::Io(_)));
}

#[test]
fn test_unsupported_extension() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs");
    match RouteConfig::from_file(&path) {
        Err(UrlGenError::UnsupportedFormat(ext)) => assert_eq!(ext, "rs"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_manager_is_shareable_across_threads() {
    let manager = std::sync::Arc::new(fixture_manager("routes.json"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let manager = manager.clone();
            std::thread::spawn(move || {
                manager
                    .action("Cache", "Flush", Some(RouteValues::new().with("id", i)))
                    .unwrap()
            })
        })
        .collect();

    let urls: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(urls, vec!["/cache/Flush/0", "/cache/Flush/1", "/cache/Flush/2", "/cache/Flush/3"]);
}
