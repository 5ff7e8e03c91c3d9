//! End-to-end parsing of `.of` files on disk.

use optsfile::{OptionValue, Options, ParseError, TokenizerConfig};
use optsfile_test_utils::config::TestConfigBuilder;
use optsfile_test_utils::fixtures::{self, OptsFixture};
use optsfile_test_utils::tracing_setup::init_test_tracing;
use pretty_assertions::assert_eq;

fn car_and_bike() -> Options {
    let car = Options::from_iter([("Make", "Honda"), ("Model", "Accord")]);
    let bike = Options::from_iter([("Type", "Mountain")]);
    Options::from_iter([("Car", car), ("Bike", bike)])
}

#[test_log::test]
fn test_parse_tab_indented_file() {
    let (_fixture, path) = OptsFixture::with_file(fixtures::CAR_AND_BIKE);
    assert_eq!(optsfile::parse(&path).unwrap(), car_and_bike());
}

#[test_log::test]
fn test_parse_space_indented_file() {
    let (_fixture, path) = OptsFixture::with_file(fixtures::CAR_AND_BIKE_SPACES);
    assert_eq!(optsfile::parse(&path).unwrap(), car_and_bike());
}

#[test]
fn test_parse_nested_file() {
    let (_fixture, path) = OptsFixture::with_file(fixtures::NESTED);
    let options = optsfile::parse(&path).unwrap();
    assert_eq!(
        options.get_path("Blah.Foo.Bar").and_then(OptionValue::as_str),
        Some("baz")
    );
}

#[test]
fn test_parse_with_configured_indent_width() {
    let fixture = OptsFixture::new();
    let path = fixture.write("two.of", "Car:\n  Make: Honda\n  Wheels:\n    Front: 1\n");
    let config = TestConfigBuilder::new().indent_width(2).build();

    let options = optsfile::parse_with(&path, &config.tokenizer).unwrap();
    assert_eq!(
        options.get_path("Car.Wheels.Front").and_then(OptionValue::as_str),
        Some("1")
    );
}

#[test]
fn test_default_width_rejects_two_space_indent() {
    let fixture = OptsFixture::new();
    let path = fixture.write("two.of", "Car:\n  Make: Honda\n");
    let err = optsfile::parse_with(&path, &TokenizerConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::Format { line: 2, .. }));
}

#[test]
fn test_parse_missing_file_is_existence_error() {
    let fixture = OptsFixture::new();
    let err = optsfile::parse(fixture.missing("durp.of")).unwrap_err();
    assert!(matches!(err, ParseError::Existence { .. }));
    assert!(err.to_string().ends_with("durp.of does not exist"));
}

#[test]
fn test_malformed_files() {
    init_test_tracing();
    let cases = [
        (fixtures::DEPTH_JUMP, "structure"),
        (fixtures::MISSING_COLON, "format"),
        (fixtures::SINGLE_SPACE, "format"),
    ];
    let fixture = OptsFixture::new();
    for (i, (content, kind)) in cases.into_iter().enumerate() {
        let path = fixture.write(&format!("bad{i}.of"), content);
        let err = optsfile::parse(&path).unwrap_err();
        let actual = match err {
            ParseError::Structure { .. } => "structure",
            ParseError::Format { .. } => "format",
            other => panic!("unexpected error for {content:?}: {other}"),
        };
        assert_eq!(actual, kind, "{content:?}");
    }
}

#[test]
fn test_repeated_parses_are_identical() {
    let (_fixture, path) = OptsFixture::with_file(fixtures::CAR_AND_BIKE);
    let first = optsfile::parse(&path).unwrap();
    let second = optsfile::parse(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.keys().collect::<Vec<_>>(),
        second.keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_leaf_pairs_match_mapping() {
    init_test_tracing();
    let (_fixture, path) = OptsFixture::with_file(fixtures::CAR_AND_BIKE);
    let records = optsfile::Reader::new(&path).unwrap().read_records().unwrap();
    let options = optsfile::parse(&path).unwrap();

    let from_records: Vec<(String, String)> = records
        .iter()
        .filter(|r| r.tokens.len() == 2)
        .map(|r| (r.tokens[0].trim_end_matches(':').to_string(), r.tokens[1].clone()))
        .collect();
    let from_options: Vec<(String, String)> = options
        .leaves()
        .into_iter()
        .map(|(path, value)| (path[path.len() - 1].to_string(), value.to_string()))
        .collect();
    assert_eq!(from_records, from_options);
}
