//! Tests for error types

use soma_census::Error;

#[test]
fn test_not_found_error() {
    let error = Error::NotFound {
        organism: "Homo sapiens".to_string(),
    };
    let error_str = format!("{error}");
    assert_eq!(error_str, "Unknown organism Homo sapiens - does not exist");
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::TypeMismatch {
        organism: "Homo sapiens".to_string(),
        soma_type: "SOMACollection".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Unknown organism Homo sapiens"));
    assert!(error_str.contains("not a SOMA Experiment"));
    assert!(error_str.contains("SOMACollection"));
}

#[test]
fn test_missing_member_error() {
    let error = Error::MissingMember {
        collection: "census".to_string(),
        key: "census_data".to_string(),
    };
    let error_str = format!("{error}");
    assert_eq!(error_str, "No member 'census_data' in collection 'census'");
}

#[test]
fn test_invalid_input_error() {
    let error = Error::InvalidInput("no root".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid input"));
    assert!(error_str.contains("no root"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Manifest error"));
}

#[test]
fn test_error_debug() {
    let error = Error::NotFound {
        organism: "Danio rerio".to_string(),
    };
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("NotFound"));
    assert!(debug_str.contains("Danio rerio"));
}
