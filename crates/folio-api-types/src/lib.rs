//! Wire types for the blog REST API.
//!
//! The server speaks plain JSON over four read-only endpoints: a post list
//! (`/api/posts`), a post detail (`/api/posts/:id`), a category list
//! (`/api/categories`) and a tag list (`/api/tags`). The list endpoint has an
//! inherited quirk: it answers with a bare array or with a paginated envelope
//! depending on which query parameters were sent. [`PostListBody`] accepts
//! both shapes and [`PostPage`] is the single normalized form everything past
//! the HTTP boundary works with.

use serde::{Deserialize, Serialize};

/// A blog post as served by the API.
///
/// List responses omit `content`; the detail endpoint serves the full markup
/// body and omits `excerpt`. `date` is the server-formatted display date
/// (for example `"January 02, 2026"`); ordering is decided server-side, so
/// the client never parses it. `id` is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub category: String,
}

/// A post category with its display metadata and post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub count: u64,
    pub color: String,
}

/// Raw body of `GET /api/posts`.
///
/// The endpoint returns `{ "posts": [...], "pages": n }` when it paginates
/// and a bare `[...]` when it does not. Decode order matters: an object only
/// matches the paginated variant, an array only the bare one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostListBody {
    Paginated { posts: Vec<Post>, pages: u32 },
    Bare(Vec<Post>),
}

/// Normalized post-list result: what the rest of the system sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub total_pages: u32,
}

impl From<PostListBody> for PostPage {
    fn from(body: PostListBody) -> Self {
        match body {
            PostListBody::Paginated { posts, pages } => Self {
                items: posts,
                total_pages: pages,
            },
            // A bare array is the complete result for that request.
            PostListBody::Bare(items) => Self {
                items,
                total_pages: 1,
            },
        }
    }
}
