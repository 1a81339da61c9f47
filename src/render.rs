//! Collection rendering: materializes loaded collections into mount points.
//!
//! Every render clears the mount first, so repeated calls with the same
//! collection are idempotent. After insertion the new items are handed to the
//! entrance-animation collaborator, scoped to the mount region.
//!
//! Video embeds and testimonial slides are always stamped `dir="ltr"`: they
//! are visual media whose internal layout must not mirror under an RTL page.

use crate::animate::{Animator, EntranceOptions};
use crate::content::{Review, Video};
use crate::dom::Node;
use crate::i18n::{Catalog, Language};

/// Image substituted when a client logo fails to load.
pub const PLACEHOLDER_IMAGE: &str = "images/clients/placeholder.png";

/// Untranslated caption under every video embed. Preserved from the original
/// site, which does not localize video captions.
const VIDEO_CATEGORY: &str = "Professional Reel";

/// Which of the two video templates to use. The homepage gallery and the
/// work-page grid share structure but carry different class prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStyle {
    Reel,
    Work,
}

impl VideoStyle {
    fn prefix(&self) -> &'static str {
        match self {
            VideoStyle::Reel => "reel",
            VideoStyle::Work => "work",
        }
    }

    /// Class carried by each rendered item, used as the animation target.
    pub fn item_class(&self) -> String {
        format!("{}-item", self.prefix())
    }
}

/// Take the first `limit` items in source order, or all of them.
pub fn visible_slice<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(limit) => &items[..limit.min(items.len())],
        None => items,
    }
}

/// Render video embeds into `mount`, replacing whatever was there, and
/// schedule their entrance. Returns the number of items rendered.
pub fn render_videos(
    mount: &mut Node,
    mount_id: &str,
    videos: &[Video],
    style: VideoStyle,
    limit: Option<usize>,
    animator: &dyn Animator,
) -> usize {
    mount.clear_children();

    let shown = visible_slice(videos, limit);
    for (index, video) in shown.iter().enumerate() {
        mount.append(build_video_item(video, index, style));
    }

    animator.entrance(
        mount_id,
        &style.item_class(),
        shown.len(),
        &EntranceOptions::reveal(),
    );
    shown.len()
}

fn build_video_item(video: &Video, index: usize, style: VideoStyle) -> Node {
    let prefix = style.prefix();

    Node::new("div")
        .with_class(&format!("{prefix}-item"))
        .with_attr("dir", "ltr")
        // positional entrance delay, linear in index
        .with_attr("style", &format!("animation-delay: {:.1}s", index as f32 * 0.1))
        .with_child(
            Node::new("div")
                .with_class(&format!("{prefix}-video-container"))
                .with_child(
                    Node::new("iframe")
                        .with_attr("src", &video.url)
                        .with_attr("frameborder", "0")
                        .with_attr(
                            "allow",
                            "accelerometer; autoplay; clipboard-write; encrypted-media; \
                             gyroscope; picture-in-picture",
                        )
                        .with_attr("allowfullscreen", "")
                        .with_attr("loading", "lazy"),
                ),
        )
        .with_child(
            Node::new("div")
                .with_class(&format!("{prefix}-info"))
                .with_child(
                    Node::new("h3")
                        .with_class(&format!("{prefix}-title"))
                        .with_text(&video.title),
                )
                .with_child(
                    Node::new("p")
                        .with_class(&format!("{prefix}-category"))
                        .with_text(VIDEO_CATEGORY),
                ),
        )
}

/// Render testimonial slides into the carousel wrapper, replacing whatever
/// was there, and schedule their entrance. The review text placeholder stays
/// empty; text is injected per-language by the synchronization step, keyed by
/// the `data-review-key` position tag.
pub fn render_testimonial_slides(
    wrapper: &mut Node,
    mount_id: &str,
    reviews: &[Review],
    animator: &dyn Animator,
) -> usize {
    wrapper.clear_children();

    for (index, review) in reviews.iter().enumerate() {
        wrapper.append(build_slide(review, index));
    }

    animator.entrance(
        mount_id,
        "swiper-slide",
        reviews.len(),
        &EntranceOptions::reveal(),
    );
    reviews.len()
}

fn build_slide(review: &Review, index: usize) -> Node {
    Node::new("div")
        .with_class("swiper-slide")
        .with_attr("dir", "ltr")
        .with_child(
            Node::new("div")
                .with_class("testimonial-content")
                .with_child(
                    Node::new("p")
                        .with_class("testimonial-review-text")
                        .with_attr("data-review-key", &index.to_string()),
                )
                .with_child(
                    Node::new("div")
                        .with_class("testimonial-author-info")
                        .with_child(
                            Node::new("img")
                                .with_class("client-image")
                                .with_attr("src", &review.image)
                                .with_attr("alt", &format!("{} logo", review.name))
                                .with_attr("data-fallback-src", PLACEHOLDER_IMAGE),
                        )
                        .with_child(
                            Node::new("span")
                                .with_class("client-name")
                                .with_text(&review.name),
                        )
                        .with_child(
                            Node::new("span")
                                .with_class("client-title")
                                .with_text(&review.title),
                        ),
                ),
        )
}

/// Replace a mount's content with a localized status panel (empty or error
/// state, depending on the key paths passed in).
pub fn render_status(mount: &mut Node, lang: Language, title_path: &str, message_path: &str) {
    mount.clear_children();
    let mut panel = Node::new("div")
        .with_class("content-status")
        .with_child(Node::new("h3"))
        .with_child(Node::new("p"));
    localize_panel(&mut panel, lang, title_path, message_path);
    mount.append(panel);
}

/// Write localized title/message text into a panel's `h3`/`p` pair. Missing
/// catalog keys skip the write, leaving whatever text was there.
pub fn localize_panel(panel: &mut Node, lang: Language, title_path: &str, message_path: &str) {
    if let Some(text) = Catalog::get(lang, title_path) {
        if let Some(heading) = panel.find_mut(&|n| n.tag() == "h3") {
            heading.set_text(text);
        }
    }
    if let Some(text) = Catalog::get(lang, message_path) {
        if let Some(body) = panel.find_mut(&|n| n.tag() == "p") {
            body.set_text(text);
        }
    }
}
