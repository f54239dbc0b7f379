//! Feed assembly: fetch every post, fan out one comment fetch per post,
//! and join the comments back onto their owning posts.

use std::collections::HashMap;

use futures::future::try_join_all;

use crate::api::ApiClient;
use crate::app::Result;
use crate::domain::Post;

/// The assembled feed: every post with its comments attached, in the order
/// the posts endpoint returned them.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub posts: Vec<Post>,
}

impl Feed {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Position of the post with the given id in the feed, if present.
    pub fn position_of(&self, post_id: i64) -> Option<usize> {
        self.posts.iter().position(|p| p.id == post_id)
    }
}

/// Build the feed in one pass.
///
/// All comment fetches are launched concurrently and joined with
/// all-or-nothing semantics: if the post fetch or any single comment fetch
/// fails, the whole assembly fails and no partial feed is produced.
///
/// Comments are joined onto posts by a keyed id lookup rather than by
/// assuming post ids form a dense 1-based sequence. A comment whose
/// `post_id` matches no fetched post is dropped with a warning.
pub async fn assemble(api: &ApiClient) -> Result<Feed> {
    let records = api.posts().await?;

    let mut posts: Vec<Post> = records.into_iter().map(Post::from_record).collect();
    let index_by_id: HashMap<i64, usize> = posts
        .iter()
        .enumerate()
        .map(|(index, post)| (post.id, index))
        .collect();

    let comment_fetches = posts.iter().map(|post| api.comments(post.id));
    let comment_blocks = try_join_all(comment_fetches).await?;

    for block in comment_blocks {
        for comment in block {
            match index_by_id.get(&comment.post_id) {
                Some(&index) => posts[index].comments.push(comment),
                None => {
                    tracing::warn!(
                        post_id = comment.post_id,
                        comment_id = comment.id,
                        "dropping comment for unknown post"
                    );
                }
            }
        }
    }

    tracing::debug!(posts = posts.len(), "feed assembled");
    Ok(Feed { posts })
}
