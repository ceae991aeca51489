//! HTTP handlers for users, posts and comments.

pub mod comentarios;
pub mod posts;
pub mod usuarios;

use crate::error::AppError;

/// Path ids that are not integers address nothing, so they are reported as not found.
fn parse_id(id_str: &str, not_found: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(not_found.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_reports_not_found() {
        assert_eq!(parse_id("42", "x").unwrap(), 42);
        assert!(matches!(parse_id("abc", "x"), Err(AppError::NotFound(m)) if m == "x"));
    }
}
