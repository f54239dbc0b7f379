use crate::assembly::Feed;
use crate::domain::{Photo, Post, ToggleState};

/// The two pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Feed,
    Vault,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Feed => Page::Vault,
            Page::Vault => Page::Feed,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Feed => "Feed",
            Page::Vault => "Vault",
        }
    }
}

/// All view state, owned by the event loop and passed immutably to the
/// renderer. The feed and photo slots are `None` until their load succeeds;
/// a failed load clears them back to `None`, which renders as the loading
/// placeholder.
pub struct TuiApp {
    pub page: Page,
    pub feed: Option<Feed>,
    pub toggles: ToggleState,
    pub photos: Option<Vec<Photo>>,
    pub post_index: usize,
    pub photo_index: usize,
    pub vault_columns: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_loading: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            page: Page::Feed,
            feed: None,
            toggles: ToggleState::default(),
            photos: None,
            post_index: 0,
            photo_index: 0,
            vault_columns: 1,
            should_quit: false,
            status_message: None,
            is_loading: false,
        }
    }

    /// Publish a freshly assembled feed (or the absence of one after a
    /// failed load). The toggle state is reset to all-collapsed and always
    /// matches the feed length.
    pub fn publish_feed(&mut self, feed: Option<Feed>) {
        self.toggles = match &feed {
            Some(feed) => ToggleState::new(feed.len()),
            None => ToggleState::default(),
        };
        self.feed = feed;
        self.post_index = 0;
    }

    pub fn publish_photos(&mut self, photos: Option<Vec<Photo>>) {
        self.photos = photos;
        self.photo_index = 0;
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.as_ref().and_then(|f| f.posts.get(self.post_index))
    }

    pub fn selected_photo(&self) -> Option<&Photo> {
        self.photos.as_ref().and_then(|p| p.get(self.photo_index))
    }

    /// Flip the comment-section visibility for the post with the given id.
    ///
    /// Pure state transition: the current toggle state is replaced by a new
    /// value with exactly one slot flipped. Posts without comments have no
    /// toggle control, so they are left untouched.
    pub fn toggle_comments(&mut self, post_id: i64) {
        let Some(feed) = &self.feed else { return };
        let Some(index) = feed.position_of(post_id) else {
            return;
        };
        if !feed.posts[index].has_comments() {
            return;
        }
        self.toggles = self.toggles.toggled(index);
    }

    pub fn toggle_selected_comments(&mut self) {
        if let Some(id) = self.selected_post().map(|p| p.id) {
            self.toggle_comments(id);
        }
    }

    pub fn move_up(&mut self) {
        match self.page {
            Page::Feed => {
                if self.post_index > 0 {
                    self.post_index -= 1;
                }
            }
            Page::Vault => {
                if self.photo_index >= self.vault_columns {
                    self.photo_index -= self.vault_columns;
                }
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.page {
            Page::Feed => {
                let len = self.feed.as_ref().map(|f| f.len()).unwrap_or(0);
                if len > 0 && self.post_index < len - 1 {
                    self.post_index += 1;
                }
            }
            Page::Vault => {
                let len = self.photos.as_ref().map(|p| p.len()).unwrap_or(0);
                if self.photo_index + self.vault_columns < len {
                    self.photo_index += self.vault_columns;
                }
            }
        }
    }

    pub fn move_left(&mut self) {
        if self.page == Page::Vault && self.photo_index > 0 {
            self.photo_index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.page == Page::Vault {
            let len = self.photos.as_ref().map(|p| p.len()).unwrap_or(0);
            if len > 0 && self.photo_index < len - 1 {
                self.photo_index += 1;
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, Post, PostRecord};

    fn post(id: i64, comment_ids: &[i64]) -> Post {
        let mut post = Post::from_record(PostRecord {
            user_id: 1,
            id,
            title: format!("post {id}"),
            body: String::new(),
        });
        post.comments = comment_ids
            .iter()
            .map(|&cid| Comment {
                post_id: id,
                id: cid,
                name: String::new(),
                email: String::new(),
                body: String::new(),
            })
            .collect();
        post
    }

    fn app_with_posts(posts: Vec<Post>) -> TuiApp {
        let mut app = TuiApp::new();
        app.publish_feed(Some(Feed { posts }));
        app
    }

    #[test]
    fn test_publish_feed_resets_toggles_to_feed_length() {
        let app = app_with_posts(vec![post(1, &[10]), post(2, &[])]);
        assert_eq!(app.toggles.len(), 2);
        assert!(!app.toggles.is_expanded(0));
        assert!(!app.toggles.is_expanded(1));
    }

    #[test]
    fn test_toggle_pair_restores_original_state() {
        let mut app = app_with_posts(vec![post(1, &[10])]);
        app.toggle_comments(1);
        assert!(app.toggles.is_expanded(0));
        app.toggle_comments(1);
        assert!(!app.toggles.is_expanded(0));
    }

    #[test]
    fn test_toggle_never_touches_other_slots() {
        let mut app = app_with_posts(vec![post(1, &[10]), post(2, &[20]), post(3, &[30])]);
        app.toggle_comments(2);
        assert!(!app.toggles.is_expanded(0));
        assert!(app.toggles.is_expanded(1));
        assert!(!app.toggles.is_expanded(2));
    }

    #[test]
    fn test_post_without_comments_is_never_toggled() {
        let mut app = app_with_posts(vec![post(1, &[])]);
        app.toggle_comments(1);
        assert!(!app.toggles.is_expanded(0));
    }

    #[test]
    fn test_toggle_unknown_post_id_is_a_no_op() {
        let mut app = app_with_posts(vec![post(1, &[10])]);
        app.toggle_comments(99);
        assert!(!app.toggles.is_expanded(0));
    }

    #[test]
    fn test_failed_load_clears_feed_and_toggles() {
        let mut app = app_with_posts(vec![post(1, &[10])]);
        app.publish_feed(None);
        assert!(app.feed.is_none());
        assert!(app.toggles.is_empty());
        assert!(app.selected_post().is_none());
    }

    #[test]
    fn test_feed_navigation_clamps_at_ends() {
        let mut app = app_with_posts(vec![post(1, &[]), post(2, &[])]);
        app.move_up();
        assert_eq!(app.post_index, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.post_index, 1);
    }

    #[test]
    fn test_vault_grid_navigation_moves_by_column() {
        let mut app = TuiApp::new();
        app.page = Page::Vault;
        app.vault_columns = 3;
        app.publish_photos(Some(
            (1..=7)
                .map(|id| Photo {
                    album_id: 1,
                    id,
                    title: format!("photo {id}"),
                    url: String::new(),
                    thumbnail_url: String::new(),
                })
                .collect(),
        ));

        app.move_down();
        assert_eq!(app.photo_index, 3);
        app.move_right();
        assert_eq!(app.photo_index, 4);
        app.move_up();
        assert_eq!(app.photo_index, 1);
        app.move_left();
        assert_eq!(app.photo_index, 0);
        // cannot step past the last photo's row
        app.photo_index = 6;
        app.move_down();
        assert_eq!(app.photo_index, 6);
    }
}
