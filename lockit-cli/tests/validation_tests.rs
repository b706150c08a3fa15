use lockit_cli::validation::{validate_directory_path, validate_file_path, validate_output_path};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_directory_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let result = validate_directory_path(temp_dir.path().to_str().unwrap());
    assert!(result.is_ok());
}

#[test]
fn test_validate_directory_path_not_exists() {
    let result = validate_directory_path("nonexistent_directory");
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.contains("Directory does not exist"));
}

#[test]
fn test_validate_directory_path_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.txt");
    fs::write(&test_file, "test content").unwrap();

    let result = validate_directory_path(test_file.to_str().unwrap());
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.contains("Path is not a directory"));
}

#[test]
fn test_validate_file_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.txt");
    fs::write(&test_file, "test content").unwrap();

    let result = validate_file_path(test_file.to_str().unwrap());
    assert!(result.is_ok());
}

#[test]
fn test_validate_file_path_not_exists() {
    let result = validate_file_path("nonexistent_file.txt");
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.contains("File does not exist"));
}

#[test]
fn test_validate_file_path_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = validate_file_path(temp_dir.path().to_str().unwrap());
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.contains("Path is not a file"));
}

#[test]
fn test_validate_output_path_writable() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.txt");

    let result = validate_output_path(test_file.to_str().unwrap());
    assert!(result.is_ok());
}

#[test]
fn test_validate_output_path_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested_file = temp_dir.path().join("nested").join("test.txt");

    let result = validate_output_path(nested_file.to_str().unwrap());
    assert!(result.is_ok());
    assert!(temp_dir.path().join("nested").exists());
}

#[test]
fn test_validate_output_path_bare_filename() {
    let result = validate_output_path("_loc_kit_output.txt");
    assert!(result.is_ok());
}
