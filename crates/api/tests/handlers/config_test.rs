use rstest::rstest;
use salonbook_api::config::parse_log_level;
use tracing::Level;

#[rstest]
#[case("trace", Level::TRACE)]
#[case("debug", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}
