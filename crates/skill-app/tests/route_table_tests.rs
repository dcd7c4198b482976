//! Behaviour of the Skill Building route table when installed in a router

use pretty_assertions::assert_eq;
use rstest::rstest;
use skill_app::routes::{self, COURSES, HOME, QUIZ, SCENARIO};
use skill_app::{create_router, AppConfig, HistoryKind, View};
use skill_router::{NavigationTarget, RouteError, Router};

fn router() -> Router<View> {
    create_router(&AppConfig::default()).unwrap()
}

#[test]
fn test_table_declares_four_routes_in_order() {
    let table: Vec<(String, String, View)> = routes::routes()
        .unwrap()
        .into_iter()
        .map(|r| (r.name.clone(), r.path().to_string(), r.view))
        .collect();

    assert_eq!(
        table,
        vec![
            ("Home".to_string(), "/".to_string(), View::Home),
            ("Courses".to_string(), "/courses".to_string(), View::Courses),
            ("Quiz".to_string(), "/quiz/:id?".to_string(), View::Quiz),
            ("Scenario".to_string(), "/scenario".to_string(), View::Scenario),
        ]
    );
}

#[rstest]
#[case("/", HOME, View::Home)]
#[case("/courses", COURSES, View::Courses)]
#[case("/quiz", QUIZ, View::Quiz)]
#[case("/quiz/42", QUIZ, View::Quiz)]
#[case("/scenario", SCENARIO, View::Scenario)]
fn test_navigating_renders_view_and_sets_name(
    #[case] path: &str,
    #[case] name: &str,
    #[case] view: View,
) {
    let mut router = router();
    let resolved = router.push(path).unwrap();
    assert_eq!(resolved.view(), Some(&view));
    assert_eq!(router.current_name(), Some(name));
}

#[test]
fn test_quiz_id_param() {
    let router = router();

    let with_id = router.resolve("/quiz/42").unwrap();
    assert_eq!(with_id.param("id"), Some("42"));

    let without_id = router.resolve("/quiz").unwrap();
    assert_eq!(without_id.name(), Some(QUIZ));
    assert_eq!(without_id.param("id"), None);
}

#[rstest]
#[case("/nonexistent")]
#[case("/quiz/42/extra")]
#[case("/courses/rust")]
fn test_undeclared_paths_do_not_match(#[case] path: &str) {
    let mut router = router();
    let resolved = router.push(path).unwrap();
    assert!(!resolved.is_matched());
    assert_eq!(router.current_name(), None);
}

#[test]
fn test_names_are_unique_and_stable() {
    let mut router = router();
    let names: Vec<String> = router.routes().iter().map(|r| r.name.clone()).collect();

    router.push("/courses").unwrap();
    router.push("/quiz/1").unwrap();
    router.back();

    let after: Vec<String> = router.routes().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, after);

    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());

    for name in [HOME, COURSES, QUIZ, SCENARIO] {
        assert!(router.has_route(name));
    }
}

#[rstest]
#[case(NavigationTarget::named(HOME), "/")]
#[case(NavigationTarget::named(COURSES), "/courses")]
#[case(NavigationTarget::named(QUIZ), "/quiz")]
#[case(NavigationTarget::named(QUIZ).with_param("id", "7"), "/quiz/7")]
#[case(NavigationTarget::named(SCENARIO), "/scenario")]
fn test_navigation_by_name(#[case] target: NavigationTarget, #[case] path: &str) {
    let mut router = router();
    let resolved = router.push(target).unwrap();
    assert_eq!(resolved.location.path, path);
    assert!(resolved.is_matched());
}

#[test]
fn test_unknown_name_is_an_error() {
    let mut router = router();
    let err = router.push(NavigationTarget::named("Dashboard")).unwrap_err();
    assert_eq!(err, RouteError::UnknownRoute("Dashboard".to_string()));
}

#[test]
fn test_hash_history_hrefs() {
    let mut config = AppConfig::default();
    config.router.history = HistoryKind::Hash;
    let router = create_router(&config).unwrap();

    assert_eq!(
        router.href(NavigationTarget::named(QUIZ).with_param("id", "42")).unwrap(),
        "/#/quiz/42"
    );
    assert_eq!(router.resolve_url("http://localhost:5173/#/scenario").name(), Some(SCENARIO));
}

#[test]
fn test_web_history_under_base() {
    let mut config = AppConfig::default();
    config.router.base = "/learn/".to_string();
    let router = create_router(&config).unwrap();

    assert_eq!(router.href("/courses").unwrap(), "/learn/courses");
    assert_eq!(router.resolve_url("/learn/quiz/9").param("id"), Some("9"));
}

#[test]
fn test_case_insensitive_config() {
    let mut config = AppConfig::default();
    config.router.case_insensitive = true;
    let router = create_router(&config).unwrap();
    assert_eq!(router.resolve("/Courses").unwrap().name(), Some(COURSES));

    assert_eq!(self::router().resolve("/Courses").unwrap().name(), None);
}

#[test]
fn test_route_titles() {
    let router = router();
    let quiz = router.get_route_by_name(QUIZ).unwrap();
    assert_eq!(quiz.get_meta("title"), Some("Quiz"));
    assert_eq!(quiz.view.module(), "components/Quiz");
}
