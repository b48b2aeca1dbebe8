use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    author::entities::Author,
    book::entities::Book,
    comment::entities::Comment,
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    member::entities::Member,
    post::entities::Post,
};

use super::StoreState;

const BUILTIN_FIXTURE: &str = include_str!("../../../fixtures/library.json");

/// Ids of the members of the built-in fixture.
pub const ALICE_ID: Uuid = Uuid::from_u128(0x0190a000_0000_7000_8000_000000000001);
pub const BOB_ID: Uuid = Uuid::from_u128(0x0190a000_0000_7000_8000_000000000002);
pub const CAROL_ID: Uuid = Uuid::from_u128(0x0190a000_0000_7000_8000_000000000003);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub authors: Vec<AuthorFixture>,
    pub books: Vec<BookFixture>,
    pub members: Vec<MemberFixture>,
    pub posts: Vec<PostFixture>,
    pub comments: Vec<CommentFixture>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorFixture {
    pub id: Option<Uuid>,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// `author` is the author's name.
#[derive(Debug, Deserialize)]
pub struct BookFixture {
    pub id: Option<Uuid>,
    pub title: String,
    pub publication_year: i32,
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// `following` lists usernames.
#[derive(Debug, Deserialize)]
pub struct MemberFixture {
    pub id: Option<Uuid>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub following: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// `author` is the author's username.
#[derive(Debug, Deserialize)]
pub struct PostFixture {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// `post` is the post title, `author` the author's username.
#[derive(Debug, Deserialize)]
pub struct CommentFixture {
    pub id: Option<Uuid>,
    pub post: String,
    pub author: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

pub async fn load_fixture(path: Option<&Path>) -> Result<StoreState, CoreError> {
    let Some(path) = path else {
        return builtin_fixture();
    };

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        CoreError::InvalidFixture(format!("cannot read {}: {e}", path.display()))
    })?;

    parse_fixture(&raw)
}

pub fn builtin_fixture() -> Result<StoreState, CoreError> {
    parse_fixture(BUILTIN_FIXTURE)
}

pub fn parse_fixture(raw: &str) -> Result<StoreState, CoreError> {
    let fixture: Fixture =
        serde_json::from_str(raw).map_err(|e| CoreError::InvalidFixture(e.to_string()))?;

    fixture.resolve()
}

impl Fixture {
    /// Turn names into ids and fill in missing ids and timestamps.
    pub fn resolve(self) -> Result<StoreState, CoreError> {
        let now = Utc::now();

        let authors: Vec<Author> = self
            .authors
            .into_iter()
            .map(|author| Author {
                id: author.id.unwrap_or_else(generate_uuid_v7),
                name: author.name,
                created_at: author.created_at.unwrap_or(now),
            })
            .collect();

        let author_ids: HashMap<&str, Uuid> = authors
            .iter()
            .map(|author| (author.name.as_str(), author.id))
            .collect();

        let books = self
            .books
            .into_iter()
            .map(|book| {
                let author = author_ids.get(book.author.as_str()).ok_or_else(|| {
                    CoreError::InvalidFixture(format!(
                        "unknown author '{}' for book '{}'",
                        book.author, book.title
                    ))
                })?;

                Ok(Book {
                    id: book.id.unwrap_or_else(generate_uuid_v7),
                    title: book.title,
                    publication_year: book.publication_year,
                    author: *author,
                    author_name: book.author,
                    created_at: book.created_at.unwrap_or(now),
                })
            })
            .collect::<Result<Vec<Book>, CoreError>>()?;

        if let Some((first, _)) = books
            .iter()
            .enumerate()
            .find(|(index, book)| books[..*index].iter().any(|other| other.same_edition(book)))
        {
            return Err(CoreError::InvalidFixture(format!(
                "duplicate book '{}'",
                books[first].title
            )));
        }

        let member_ids: HashMap<String, Uuid> = self
            .members
            .iter()
            .map(|member| {
                (
                    member.username.clone(),
                    member.id.unwrap_or_else(generate_uuid_v7),
                )
            })
            .collect();

        let lookup_member = |username: &str| {
            member_ids
                .get(username)
                .copied()
                .ok_or_else(|| CoreError::InvalidFixture(format!("unknown member '{username}'")))
        };

        let members = self
            .members
            .into_iter()
            .map(|member| {
                Ok(Member {
                    id: lookup_member(&member.username)?,
                    following: member
                        .following
                        .iter()
                        .map(|username| lookup_member(username))
                        .collect::<Result<Vec<Uuid>, CoreError>>()?,
                    username: member.username,
                    email: member.email,
                    bio: member.bio,
                    created_at: member.created_at.unwrap_or(now),
                })
            })
            .collect::<Result<Vec<Member>, CoreError>>()?;

        let posts = self
            .posts
            .into_iter()
            .map(|post| {
                let created_at = post.created_at.unwrap_or(now);

                Ok(Post {
                    id: post.id.unwrap_or_else(generate_uuid_v7),
                    author: lookup_member(&post.author)?,
                    author_username: post.author,
                    title: post.title,
                    content: post.content,
                    created_at,
                    updated_at: created_at,
                })
            })
            .collect::<Result<Vec<Post>, CoreError>>()?;

        // `None` marks a title shared by several posts.
        let mut post_ids: HashMap<&str, Option<Uuid>> = HashMap::new();
        for post in &posts {
            post_ids
                .entry(post.title.as_str())
                .and_modify(|id| *id = None)
                .or_insert(Some(post.id));
        }

        let comments = self
            .comments
            .into_iter()
            .map(|comment| {
                let post = match post_ids.get(comment.post.as_str()) {
                    Some(Some(id)) => *id,
                    Some(None) => {
                        return Err(CoreError::InvalidFixture(format!(
                            "ambiguous post title '{}'",
                            comment.post
                        )));
                    }
                    None => {
                        return Err(CoreError::InvalidFixture(format!(
                            "unknown post '{}'",
                            comment.post
                        )));
                    }
                };
                let created_at = comment.created_at.unwrap_or(now);

                Ok(Comment {
                    id: comment.id.unwrap_or_else(generate_uuid_v7),
                    post,
                    author: lookup_member(&comment.author)?,
                    author_username: comment.author,
                    content: comment.content,
                    created_at,
                    updated_at: created_at,
                })
            })
            .collect::<Result<Vec<Comment>, CoreError>>()?;

        Ok(StoreState {
            authors,
            books,
            members,
            posts,
            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixture_resolves() {
        let state = builtin_fixture().unwrap();

        assert_eq!(state.authors.len(), 5);
        assert_eq!(state.books.len(), 10);
        assert_eq!(state.members.len(), 3);
        assert_eq!(state.posts.len(), 5);
        assert_eq!(state.comments.len(), 3);

        let alice = state
            .members
            .iter()
            .find(|member| member.username == "alice")
            .unwrap();
        assert_eq!(alice.id, ALICE_ID);
        assert_eq!(alice.following, vec![BOB_ID, CAROL_ID]);
    }

    #[test]
    fn test_unknown_author_is_rejected() {
        let raw = r#"{
            "authors": [{"name": "Frank Herbert"}],
            "books": [{"title": "Kindred", "publication_year": 1979, "author": "Octavia E. Butler"}]
        }"#;

        assert!(matches!(
            parse_fixture(raw),
            Err(CoreError::InvalidFixture(message)) if message.contains("Octavia E. Butler")
        ));
    }

    #[test]
    fn test_duplicate_book_is_rejected() {
        let raw = r#"{
            "authors": [{"name": "Frank Herbert"}],
            "books": [
                {"title": "Dune", "publication_year": 1965, "author": "Frank Herbert"},
                {"title": "Dune", "publication_year": 1965, "author": "Frank Herbert"}
            ]
        }"#;

        assert!(matches!(parse_fixture(raw), Err(CoreError::InvalidFixture(_))));
    }

    #[test]
    fn test_comment_on_unknown_or_ambiguous_post_is_rejected() {
        let unknown = r#"{
            "members": [{"username": "alice"}],
            "comments": [{"post": "Nowhere", "author": "alice", "content": "Hi"}]
        }"#;
        assert!(matches!(
            parse_fixture(unknown),
            Err(CoreError::InvalidFixture(message)) if message.contains("Nowhere")
        ));

        let ambiguous = r#"{
            "members": [{"username": "alice"}],
            "posts": [
                {"title": "Hello", "content": "one", "author": "alice"},
                {"title": "Hello", "content": "two", "author": "alice"}
            ],
            "comments": [{"post": "Hello", "author": "alice", "content": "Which one?"}]
        }"#;
        assert!(matches!(
            parse_fixture(ambiguous),
            Err(CoreError::InvalidFixture(message)) if message.contains("ambiguous")
        ));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let state = parse_fixture("{}").unwrap();
        assert!(state.authors.is_empty());
        assert!(state.posts.is_empty());

        assert!(matches!(
            parse_fixture("not json"),
            Err(CoreError::InvalidFixture(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let result = load_fixture(Some(Path::new("/definitely/not/here.json"))).await;
        assert!(
            matches!(result, Err(CoreError::InvalidFixture(message)) if message.contains("cannot read"))
        );
    }
}
