/// Names are opaque keys: any non-empty string without control characters.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.chars().any(char::is_control) {
        return Err("name cannot contain control characters".to_string());
    }
    Ok(())
}

pub fn validate_url(url: &Option<String>) -> Result<(), String> {
    if let Some(u) = url {
        if u.len() > 2048 {
            return Err("URL cannot exceed 2048 characters".to_string());
        }
        if !u.starts_with("http://") && !u.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
    }
    Ok(())
}
