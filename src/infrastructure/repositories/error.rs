use crate::domain::errors::DomainError;
use crate::domain::review::duplicate_review;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_GENRE_SLUG: &str = "genres_slug_key";
const CNT_REVIEW_AUTHOR_TITLE: &str = "reviews_author_id_title_id_key";
const CNT_REVIEW_SCORE: &str = "reviews_score_range_chk";
const CNT_REVIEW_TITLE: &str = "reviews_title_id_fkey";
const CNT_COMMENT_REVIEW: &str = "comments_review_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("category with this slug already exists".into())
                    }
                    CNT_GENRE_SLUG => {
                        DomainError::Conflict("genre with this slug already exists".into())
                    }
                    // a concurrent insert lost the race past the uniqueness check
                    CNT_REVIEW_AUTHOR_TITLE => duplicate_review(),
                    CNT_REVIEW_SCORE => {
                        DomainError::Validation("score must be between 1 and 10".into())
                    }
                    CNT_REVIEW_TITLE => DomainError::NotFound("title not found".into()),
                    CNT_COMMENT_REVIEW => DomainError::NotFound("review not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::DUPLICATE_REVIEW_MESSAGE;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct ConstraintViolation {
        constraint: &'static str,
        code: &'static str,
    }

    impl fmt::Display for ConstraintViolation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "violates constraint \"{}\"", self.constraint)
        }
    }

    impl StdError for ConstraintViolation {}

    impl DatabaseError for ConstraintViolation {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }
    }

    fn unique_violation(constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintViolation {
            constraint,
            code: "23505",
        }))
    }

    #[test]
    fn concurrent_duplicate_review_maps_to_the_guard_error() {
        match map_sqlx(unique_violation(CNT_REVIEW_AUTHOR_TITLE)) {
            DomainError::Validation(msg) => assert_eq!(msg, DUPLICATE_REVIEW_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn slug_collision_is_a_conflict() {
        assert!(matches!(
            map_sqlx(unique_violation(CNT_GENRE_SLUG)),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn unknown_constraint_name_is_persistence_failure() {
        let err = sqlx::Error::Database(Box::new(ConstraintViolation {
            constraint: "some_other_key",
            code: "23505",
        }));
        assert!(matches!(map_sqlx(err), DomainError::Persistence(_)));
    }

    #[test]
    fn missing_row_is_persistence_failure() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
