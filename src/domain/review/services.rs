// src/domain/review/services.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::entity::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::title::TitleId;
use crate::domain::user::UserId;

pub const DUPLICATE_REVIEW_MESSAGE: &str = "User can leave only one review for a title.";

pub fn duplicate_review() -> DomainError {
    DomainError::Validation(DUPLICATE_REVIEW_MESSAGE.into())
}

/// Enforces one review per author per title.
///
/// Creation and update are separate entry points; only creation consults
/// storage. The check-then-insert window is closed by the unique
/// `(author_id, title_id)` constraint, which surfaces as the same error.
pub struct ReviewUniquenessGuard {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewUniquenessGuard {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    pub async fn validate_create(&self, author: UserId, title_id: TitleId) -> DomainResult<()> {
        if self.repo.exists_for(author, title_id).await? {
            tracing::info!(%author, %title_id, "duplicate review rejected");
            return Err(duplicate_review());
        }
        Ok(())
    }

    #[allow(clippy::unused_self)]
    pub fn validate_update(&self, _review: &Review) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::entity::{NewReview, ReviewUpdate};
    use crate::domain::review::value_objects::{ReviewId, ReviewText, Score};
    use crate::domain::user::{Author, Username};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct PairsRepo {
        pairs: Mutex<Vec<(UserId, TitleId)>>,
    }

    #[async_trait]
    impl ReviewRepository for PairsRepo {
        async fn exists_for(&self, author: UserId, title_id: TitleId) -> DomainResult<bool> {
            Ok(self
                .pairs
                .lock()
                .unwrap()
                .iter()
                .any(|(a, t)| *a == author && *t == title_id))
        }

        async fn insert(&self, review: NewReview) -> DomainResult<Review> {
            self.pairs
                .lock()
                .unwrap()
                .push((review.author_id, review.title_id));
            Ok(Review {
                id: ReviewId::new(1)?,
                title_id: review.title_id,
                author: Author {
                    id: review.author_id,
                    username: Username::new("reviewer")?,
                },
                text: review.text,
                score: review.score,
                pub_date: review.pub_date,
            })
        }

        async fn update(&self, _update: ReviewUpdate) -> DomainResult<Review> {
            Err(DomainError::NotFound("not implemented".into()))
        }

        async fn delete(&self, _id: ReviewId) -> DomainResult<()> {
            Ok(())
        }

        async fn find_by_id(&self, _t: TitleId, _id: ReviewId) -> DomainResult<Option<Review>> {
            Ok(None)
        }

        async fn list_by_title(&self, _t: TitleId) -> DomainResult<Vec<Review>> {
            Ok(vec![])
        }
    }

    fn ids(user: i64, title: i64) -> (UserId, TitleId) {
        (UserId::new(user).unwrap(), TitleId::new(title).unwrap())
    }

    #[tokio::test]
    async fn first_review_passes_second_is_rejected() {
        let repo = Arc::new(PairsRepo::default());
        let guard = ReviewUniquenessGuard::new(repo.clone());
        let (user, title) = ids(1, 7);

        guard.validate_create(user, title).await.unwrap();
        let review = repo
            .insert(NewReview {
                title_id: title,
                author_id: user,
                text: ReviewText::new("great").unwrap(),
                score: Score::new(5).unwrap(),
                pub_date: Utc::now(),
            })
            .await
            .unwrap();

        let err = guard.validate_create(user, title).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, DUPLICATE_REVIEW_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }

        // updating the existing review is never a duplicate
        guard.validate_update(&review).unwrap();
    }

    #[tokio::test]
    async fn other_users_and_titles_are_independent() {
        let repo = Arc::new(PairsRepo::default());
        repo.pairs.lock().unwrap().push(ids(1, 7));
        let guard = ReviewUniquenessGuard::new(repo);

        let (other_user, same_title) = ids(2, 7);
        guard.validate_create(other_user, same_title).await.unwrap();

        let (same_user, other_title) = ids(1, 8);
        guard.validate_create(same_user, other_title).await.unwrap();
    }
}
