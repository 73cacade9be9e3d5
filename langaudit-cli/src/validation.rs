use std::path::Path;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if let Some(parent) = path_obj.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        // Try to create the directory
        if let Err(e) = std::fs::create_dir_all(parent) {
            return Err(format!("Cannot create output directory: {}", e));
        }
    }

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    Ok(())
}

/// Validate language code format using unic-langid (same as lib crate)
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    langaudit::catalog::validate_locale(lang).map_err(|_| {
        format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )
    })
}

/// Validate a source extension given on the command line.
pub fn validate_extension(ext: &str) -> Result<(), String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }
    if trimmed.contains(['/', '\\', '*']) {
        return Err(format!(
            "Invalid extension: {}. Expected a bare extension such as jsx or .tsx",
            ext
        ));
    }
    Ok(())
}
