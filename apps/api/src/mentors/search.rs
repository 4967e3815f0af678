use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::errors::AppError;

pub const AVAILABLE: &str = "available";

/// Query-string filters for the mentor directory. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorFilter {
    pub expertise: Option<String>,
    pub company: Option<String>,
    pub min_rating: Option<f64>,
}

impl MentorFilter {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.min_rating {
            Some(r) if !r.is_finite() || r < 0.0 => Err(AppError::Validation(format!(
                "minRating must be a non-negative number, got {r}"
            ))),
            _ => Ok(()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Builds the directory query: available mentors only, best rated first,
/// busiest first among equal ratings.
pub fn search_query(filter: &MentorFilter) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM mentors WHERE availability_status = ");
    qb.push_bind(AVAILABLE);

    if let Some(expertise) = non_blank(&filter.expertise) {
        qb.push(" AND ").push_bind(expertise).push(" = ANY(expertise)");
    }
    if let Some(company) = non_blank(&filter.company) {
        qb.push(" AND company ILIKE ").push_bind(format!("%{company}%"));
    }
    if let Some(min_rating) = filter.min_rating {
        qb.push(" AND rating >= ").push_bind(min_rating);
    }

    qb.push(" ORDER BY rating DESC, total_sessions DESC");
    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn test_unfiltered_query() {
        let filter = MentorFilter::default();
        let qb = search_query(&filter);
        assert_eq!(
            qb.sql(),
            "SELECT * FROM mentors WHERE availability_status = $1 \
             ORDER BY rating DESC, total_sessions DESC"
        );
    }

    #[test]
    fn test_all_filters_bind_in_order() {
        let filter = MentorFilter {
            expertise: Some("Machine Learning".to_string()),
            company: Some("acme".to_string()),
            min_rating: Some(4.5),
        };
        let qb = search_query(&filter);
        let sql = qb.sql();
        assert!(sql.contains("AND $2 = ANY(expertise)"));
        assert!(sql.contains("AND company ILIKE $3"));
        assert!(sql.contains("AND rating >= $4"));
        assert!(sql.ends_with("ORDER BY rating DESC, total_sessions DESC"));
    }

    #[test]
    fn test_blank_filters_ignored() {
        let filter = MentorFilter {
            expertise: Some("   ".to_string()),
            company: Some(String::new()),
            min_rating: None,
        };
        let qb = search_query(&filter);
        assert!(!qb.sql().contains("ANY"));
        assert!(!qb.sql().contains("ILIKE"));
    }

    #[test]
    fn test_query_string_reaches_sql() {
        let uri: Uri = "/api/mentors?minRating=4.5&company=acme".parse().unwrap();
        let Query(filter) = Query::<MentorFilter>::try_from_uri(&uri).unwrap();
        assert_eq!(filter.min_rating, Some(4.5));
        assert_eq!(filter.company.as_deref(), Some("acme"));

        let qb = search_query(&filter);
        assert!(qb.sql().contains("AND company ILIKE $2"));
        assert!(qb.sql().contains("AND rating >= $3"));
    }

    #[test]
    fn test_min_rating_validation() {
        let bad = MentorFilter {
            min_rating: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(AppError::Validation(_))));
        assert!(MentorFilter::default().validate().is_ok());
    }
}
