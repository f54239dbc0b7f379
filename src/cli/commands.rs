use crate::app::{AppContext, Result};
use crate::assembly;

/// Assemble the feed once and dump it to stdout.
pub async fn print_feed(ctx: &AppContext, with_comments: bool) -> Result<()> {
    let feed = assembly::assemble(&ctx.api).await?;

    if feed.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for post in &feed.posts {
        println!("[{:>3}] {} ({} comments)", post.id, post.title, post.comments.len());
        if with_comments {
            for comment in &post.comments {
                println!("      {} | {} <{}>", comment.id, comment.name, comment.email);
            }
        }
    }

    Ok(())
}

/// Fetch the configured album once and dump it to stdout.
pub async fn print_vault(ctx: &AppContext) -> Result<()> {
    let photos = ctx.api.photos(ctx.album_id).await?;

    if photos.is_empty() {
        println!("No photos in album {}", ctx.album_id);
        return Ok(());
    }

    for photo in &photos {
        println!("[{:>4}] {}\n       {}", photo.id, photo.title, photo.url);
    }

    Ok(())
}
