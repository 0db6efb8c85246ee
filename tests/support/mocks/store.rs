// tests/support/mocks/store.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use yamdb_core::domain::catalog::{
    CatalogEntry, CatalogName, CatalogRepository, Category, Genre, NewCatalogEntry, Slug,
};
use yamdb_core::domain::comment::{
    Comment, CommentId, CommentRepository, CommentUpdate, NewComment,
};
use yamdb_core::domain::errors::{DomainError, DomainResult};
use yamdb_core::domain::review::{
    NewReview, Review, ReviewId, ReviewRepository, ReviewUpdate, duplicate_review,
};
use yamdb_core::domain::title::{
    NewTitle, Rating, ReleaseYear, Title, TitleFilter, TitleId, TitleName, TitleReadRepository,
    TitleUpdate, TitleWriteRepository,
};
use yamdb_core::domain::user::{
    Author, Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, Username,
};

use super::security::IDENTITIES;
use super::time::fixed_now;

#[derive(Clone)]
struct StoredTitle {
    id: i64,
    name: TitleName,
    year: ReleaseYear,
    description: Option<String>,
    category_id: Option<i64>,
    genre_ids: Vec<i64>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    categories: Vec<Category>,
    genres: Vec<Genre>,
    titles: Vec<StoredTitle>,
    reviews: Vec<Review>,
    comments: Vec<Comment>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn author(&self, id: UserId) -> DomainResult<Author> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(Author::from)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))
    }

    fn hydrate(&self, stored: &StoredTitle) -> DomainResult<Title> {
        let scores: Vec<f64> = self
            .reviews
            .iter()
            .filter(|r| i64::from(r.title_id) == stored.id)
            .map(|r| f64::from(r.score.value()))
            .collect();
        let mean = (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);

        Ok(Title {
            id: TitleId::new(stored.id)?,
            name: stored.name.clone(),
            year: stored.year,
            description: stored.description.clone(),
            category: stored.category_id.and_then(|id| {
                self.categories
                    .iter()
                    .find(|c| c.surrogate_id() == id)
                    .cloned()
            }),
            genres: self
                .genres
                .iter()
                .filter(|g| stored.genre_ids.contains(&g.surrogate_id()))
                .cloned()
                .collect(),
            rating: Rating::from_mean(mean),
        })
    }

    fn remove_title_cascade(&mut self, title_id: i64) {
        let review_ids: Vec<ReviewId> = self
            .reviews
            .iter()
            .filter(|r| i64::from(r.title_id) == title_id)
            .map(|r| r.id)
            .collect();
        self.comments.retain(|c| !review_ids.contains(&c.review_id));
        self.reviews.retain(|r| i64::from(r.title_id) != title_id);
        self.titles.retain(|t| t.id != title_id);
    }
}

/// Single in-memory backing store implementing every repository port, with
/// the same cascading and uniqueness rules as the SQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    pub fn seed_user(&self, id: i64, username: &str, role: Role) {
        let mut state = self.lock();
        state.users.push(User {
            id: UserId::new(id).unwrap(),
            username: Username::new(username).unwrap(),
            email: Email::new(format!("{username}@example.com")).unwrap(),
            password_hash: PasswordHash::new("hashed:secret-pass").unwrap(),
            role,
            bio: None,
            created_at: fixed_now(),
        });
        state.next_id = state.next_id.max(id);
    }

    pub fn seed_category(&self, slug: &str, name: &str) -> Category {
        let mut state = self.lock();
        let id = state.next_id();
        let category =
            Category::from_parts(id, Slug::new(slug).unwrap(), CatalogName::new(name).unwrap())
                .unwrap();
        state.categories.push(category.clone());
        category
    }

    pub fn seed_genre(&self, slug: &str, name: &str) -> Genre {
        let mut state = self.lock();
        let id = state.next_id();
        let genre =
            Genre::from_parts(id, Slug::new(slug).unwrap(), CatalogName::new(name).unwrap())
                .unwrap();
        state.genres.push(genre.clone());
        genre
    }

    pub fn review_count(&self) -> usize {
        self.lock().reviews.len()
    }
}

/// Store with the token identities as users, category `books` and genres
/// `fantasy` and `drama`.
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());
    for (_, id, username, role) in IDENTITIES {
        store.seed_user(id, username, role);
    }
    store.seed_category("books", "Books");
    store.seed_category("films", "Films");
    store.seed_genre("fantasy", "Fantasy");
    store.seed_genre("drama", "Drama");
    store
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let user = User {
            id: UserId::new(state.next_id())?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            bio: None,
            created_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }
}

fn catalog_insert<T: CatalogEntry>(
    entries: &mut Vec<T>,
    id: i64,
    entry: NewCatalogEntry,
) -> DomainResult<T> {
    if entries.iter().any(|e| e.slug() == &entry.slug) {
        return Err(DomainError::Conflict("slug already exists".into()));
    }
    let created = T::from_parts(id, entry.slug, entry.name)?;
    entries.push(created.clone());
    Ok(created)
}

fn catalog_list<T: CatalogEntry>(entries: &[T], search: Option<&str>) -> Vec<T> {
    let needle = search.map(str::to_lowercase);
    let mut found: Vec<T> = entries
        .iter()
        .filter(|e| match &needle {
            Some(n) => e.name().as_str().to_lowercase().contains(n),
            None => true,
        })
        .cloned()
        .collect();
    found.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
    found
}

#[async_trait]
impl CatalogRepository<Category> for InMemoryStore {
    async fn insert(&self, entry: NewCatalogEntry) -> DomainResult<Category> {
        let mut state = self.lock();
        let id = state.next_id();
        catalog_insert(&mut state.categories, id, entry)
    }

    async fn delete_by_slug(&self, slug: &Slug) -> DomainResult<()> {
        let mut state = self.lock();
        let Some(id) = state
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .map(Category::surrogate_id)
        else {
            return Err(DomainError::NotFound("category not found".into()));
        };
        state.categories.retain(|c| c.surrogate_id() != id);
        // ON DELETE SET NULL
        for title in &mut state.titles {
            if title.category_id == Some(id) {
                title.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<Category>> {
        Ok(catalog_list(&self.lock().categories, search))
    }
}

#[async_trait]
impl CatalogRepository<Genre> for InMemoryStore {
    async fn insert(&self, entry: NewCatalogEntry) -> DomainResult<Genre> {
        let mut state = self.lock();
        let id = state.next_id();
        catalog_insert(&mut state.genres, id, entry)
    }

    async fn delete_by_slug(&self, slug: &Slug) -> DomainResult<()> {
        let mut state = self.lock();
        let Some(id) = state
            .genres
            .iter()
            .find(|g| &g.slug == slug)
            .map(Genre::surrogate_id)
        else {
            return Err(DomainError::NotFound("genre not found".into()));
        };
        state.genres.retain(|g| g.surrogate_id() != id);
        for title in &mut state.titles {
            title.genre_ids.retain(|g| *g != id);
        }
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Genre>> {
        Ok(self
            .lock()
            .genres
            .iter()
            .find(|g| &g.slug == slug)
            .cloned())
    }

    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<Genre>> {
        Ok(catalog_list(&self.lock().genres, search))
    }
}

#[async_trait]
impl TitleWriteRepository for InMemoryStore {
    async fn insert(&self, title: NewTitle) -> DomainResult<Title> {
        let mut state = self.lock();
        let stored = StoredTitle {
            id: state.next_id(),
            name: title.name,
            year: title.year,
            description: title.description,
            category_id: Some(title.category.surrogate_id()),
            genre_ids: title.genres.iter().map(Genre::surrogate_id).collect(),
        };
        state.titles.push(stored.clone());
        state.hydrate(&stored)
    }

    async fn update(&self, update: TitleUpdate) -> DomainResult<Title> {
        let mut state = self.lock();
        let id = i64::from(update.id);
        let stored = state
            .titles
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound("title not found".into()))?;

        if let Some(name) = update.name {
            stored.name = name;
        }
        if let Some(year) = update.year {
            stored.year = year;
        }
        if let Some(description) = update.description {
            stored.description = description;
        }
        if let Some(category) = update.category {
            stored.category_id = Some(category.surrogate_id());
        }
        if let Some(genres) = update.genres {
            stored.genre_ids = genres.iter().map(Genre::surrogate_id).collect();
        }

        let snapshot = stored.clone();
        state.hydrate(&snapshot)
    }

    async fn delete(&self, id: TitleId) -> DomainResult<()> {
        let mut state = self.lock();
        let id = i64::from(id);
        if !state.titles.iter().any(|t| t.id == id) {
            return Err(DomainError::NotFound("title not found".into()));
        }
        state.remove_title_cascade(id);
        Ok(())
    }
}

#[async_trait]
impl TitleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>> {
        let state = self.lock();
        state
            .titles
            .iter()
            .find(|t| t.id == i64::from(id))
            .map(|t| state.hydrate(t))
            .transpose()
    }

    async fn list(&self, filter: &TitleFilter) -> DomainResult<Vec<Title>> {
        let state = self.lock();
        let titles = state
            .titles
            .iter()
            .map(|t| state.hydrate(t))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(titles.into_iter().filter(|t| filter.matches(t)).collect())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn exists_for(&self, author: UserId, title_id: TitleId) -> DomainResult<bool> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .any(|r| r.author.id == author && r.title_id == title_id))
    }

    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let mut state = self.lock();
        // UNIQUE (author_id, title_id)
        if state
            .reviews
            .iter()
            .any(|r| r.author.id == review.author_id && r.title_id == review.title_id)
        {
            return Err(duplicate_review());
        }
        let author = state.author(review.author_id)?;
        let created = Review {
            id: ReviewId::new(state.next_id())?,
            title_id: review.title_id,
            author,
            text: review.text,
            score: review.score,
            pub_date: review.pub_date,
        };
        state.reviews.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review> {
        let mut state = self.lock();
        let review = state
            .reviews
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| DomainError::NotFound("review not found".into()))?;
        if let Some(text) = update.text {
            review.text = text;
        }
        if let Some(score) = update.score {
            review.score = score;
        }
        Ok(review.clone())
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        let mut state = self.lock();
        if !state.reviews.iter().any(|r| r.id == id) {
            return Err(DomainError::NotFound("review not found".into()));
        }
        state.comments.retain(|c| c.review_id != id);
        state.reviews.retain(|r| r.id != id);
        Ok(())
    }

    async fn find_by_id(&self, title_id: TitleId, id: ReviewId) -> DomainResult<Option<Review>> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .find(|r| r.id == id && r.title_id == title_id)
            .cloned())
    }

    async fn list_by_title(&self, title_id: TitleId) -> DomainResult<Vec<Review>> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .filter(|r| r.title_id == title_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.lock();
        if !state.reviews.iter().any(|r| r.id == comment.review_id) {
            return Err(DomainError::NotFound("review not found".into()));
        }
        let author = state.author(comment.author_id)?;
        let created = Comment {
            id: CommentId::new(state.next_id())?,
            review_id: comment.review_id,
            author,
            text: comment.text,
            pub_date: comment.pub_date,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut state = self.lock();
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.text = update.text;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.lock();
        if !state.comments.iter().any(|c| c.id == id) {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        state.comments.retain(|c| c.id != id);
        Ok(())
    }

    async fn find_by_id(
        &self,
        review_id: ReviewId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        Ok(self
            .lock()
            .comments
            .iter()
            .find(|c| c.id == id && c.review_id == review_id)
            .cloned())
    }

    async fn list_by_review(&self, review_id: ReviewId) -> DomainResult<Vec<Comment>> {
        Ok(self
            .lock()
            .comments
            .iter()
            .filter(|c| c.review_id == review_id)
            .cloned()
            .collect())
    }
}
