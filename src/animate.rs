//! Entrance-animation collaborator interface.
//!
//! The renderer hands freshly inserted items to an [`Animator`] so a host can
//! play an entrance effect when the mount scrolls into view and reverse it on
//! scroll-out. This crate only depends on that narrow contract; the actual
//! choreography lives outside.

use tracing::debug;

/// Options for a scroll-triggered entrance effect.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceOptions {
    /// Vertical distance the items travel in, in pixels
    pub distance: f32,

    /// Duration of each item's transition, in seconds
    pub duration_secs: f32,

    /// Easing curve name understood by the animation host
    pub ease: &'static str,

    /// Delay between consecutive items, in seconds
    pub stagger_secs: f32,

    /// Viewport fraction the mount's top must cross before playing
    /// (0.8 = play once the mount reaches 80% down the viewport)
    pub trigger_viewport: f32,

    /// Whether the effect reverses when the mount scrolls back out
    pub reverse_on_exit: bool,
}

impl EntranceOptions {
    /// The site-wide reveal used for every rendered collection.
    pub fn reveal() -> Self {
        Self {
            distance: 50.0,
            duration_secs: 1.0,
            ease: "power2.out",
            stagger_secs: 0.1,
            trigger_viewport: 0.8,
            reverse_on_exit: true,
        }
    }
}

/// Plays entrance effects for newly rendered collection items.
pub trait Animator: Send + Sync {
    /// Schedule an entrance for `count` items of class `item_class` inside
    /// the mount region `mount_id`.
    fn entrance(&self, mount_id: &str, item_class: &str, count: usize, options: &EntranceOptions);
}

/// Animator that does nothing. Useful where visuals are irrelevant.
pub struct NullAnimator;

impl Animator for NullAnimator {
    fn entrance(&self, _mount_id: &str, _item_class: &str, _count: usize, _options: &EntranceOptions) {}
}

/// Animator that logs each scheduled effect.
pub struct TracingAnimator;

impl Animator for TracingAnimator {
    fn entrance(&self, mount_id: &str, item_class: &str, count: usize, options: &EntranceOptions) {
        debug!(
            "entrance scheduled: {} x .{} in #{} (stagger {}s)",
            count, item_class, mount_id, options.stagger_secs
        );
    }
}
