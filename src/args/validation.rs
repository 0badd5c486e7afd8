use regex::Regex;
use std::sync::OnceLock;

use crate::view::score::SortColumn;

/// # Errors
///
/// Will return `Err` if the value is neither a GHIN number nor an e-mail
/// address
pub fn check_login_identifier(value: &str) -> Result<String, String> {
    static GHIN_RE: OnceLock<Regex> = OnceLock::new();
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let ghin_re = GHIN_RE.get_or_init(|| {
        Regex::new(r"^\d{1,10}$").expect("Invalid regex pattern - this is a programming error")
    });
    let email_re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .expect("Invalid regex pattern - this is a programming error")
    });

    let trimmed = value.trim();
    if ghin_re.is_match(trimmed) || email_re.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(format!(
            "'{value}' is not a GHIN number or an e-mail address."
        ))
    }
}

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL
pub fn check_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(format!(
            "The base url '{value}' must start with http:// or https://."
        ))
    }
}

/// # Errors
///
/// Will return `Err` if the column name is not one the stats table sorts by
pub fn check_sort_column(value: &str) -> Result<String, String> {
    let lowered = value.trim().to_lowercase();
    if SortColumn::from_name(&lowered).is_some() {
        Ok(lowered)
    } else {
        Err(format!(
            "'{value}' is not a sortable column. Expected hole, par, avg, vspar, stddev, best, worst, or rounds."
        ))
    }
}
