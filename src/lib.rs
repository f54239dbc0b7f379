//! # Corkboard
//!
//! A terminal client for a JSONPlaceholder-style REST API with two pages:
//! a feed of posts with expandable comment sections, and a vault showing a
//! photo-album grid.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → ApiClient → Assembly → View state → TUI
//! ```
//!
//! - [`fetcher`]: one-shot HTTP GETs behind a trait seam
//! - [`api`]: typed access to the posts, comments, and photos resources
//! - [`assembly`]: the fan-out/join that attaches comments to posts
//! - [`tui`]: two-page terminal interface built with ratatui
//!
//! All state is rebuilt from the network on load; nothing is persisted.

/// Application context and error handling.
pub mod app;

/// Typed access to the remote data source.
pub mod api;

/// Feed assembly: fetch posts, fan out comment fetches, join by post id.
pub mod assembly;

/// Command-line interface using clap.
///
/// - `feed` - assemble and print the feed
/// - `vault` - fetch and print the photo album
/// - `tui` - launch the TUI (default)
pub mod cli;

/// Configuration, read from `~/.config/corkboard/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Post`](domain::Post) / [`PostRecord`](domain::PostRecord)
/// - [`Comment`](domain::Comment)
/// - [`Photo`](domain::Photo)
/// - [`ToggleState`](domain::ToggleState): per-post comment visibility
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for one-shot GETs
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Terminal user interface.
///
/// Two pages switched with Tab. Feed: j/k navigate posts, Enter toggles the
/// selected post's comments. Vault: h/j/k/l navigate the grid, o opens the
/// full-size photo in the browser. R refreshes the current page, q quits.
pub mod tui;
