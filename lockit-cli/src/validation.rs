//! Shared argument validation for the commands.

use std::path::Path;

/// Validate a tree root exists and is a directory
pub fn validate_directory_path(path: &str) -> Result<(), String> {
    let dir = Path::new(path);
    if !dir.exists() {
        return Err(format!("Directory does not exist: {}", path));
    }
    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", path));
    }
    Ok(())
}

/// Validate an input file exists and is a regular file
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let file = Path::new(path);
    if !file.exists() {
        return Err(format!("File does not exist: {}", path));
    }
    if !file.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }
    Ok(())
}

/// Validate an output file's directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create output directory: {}", e))?;
    }
    Ok(())
}
