//! Carousel collaborator interface.
//!
//! The testimonial slides are handed to a third-party carousel widget. This
//! crate only builds the slide markup and drives the widget's lifecycle
//! through the narrow [`Carousel`] trait; slide transitions, autoplay timers
//! and navigation arrows are the widget's business.

use tracing::debug;

/// Responsive breakpoint: from `min_width` px upwards, show
/// `slides_per_view` slides with `space_between` px gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: u32,
    pub space_between: u32,
}

/// Widget configuration handed over at (re)initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Slides visible below the first breakpoint
    pub slides_per_view: u32,

    /// Gap between slides in pixels
    pub space_between: u32,

    /// Loop back to the first slide after the last
    pub looped: bool,

    /// Slide transition duration in milliseconds
    pub speed_ms: u64,

    /// Auto-advance interval in milliseconds
    pub autoplay_delay_ms: u64,

    /// Stop autoplay once the user touches the navigation
    pub pause_on_interaction: bool,

    pub breakpoints: Vec<Breakpoint>,

    /// Class of the "next" navigation element
    pub nav_next: String,

    /// Class of the "previous" navigation element
    pub nav_prev: String,
}

impl CarouselConfig {
    /// The testimonial carousel setup: one slide on mobile, two from 768 px,
    /// three from 1024 px, looping, with 800 ms transitions.
    pub fn testimonials(autoplay_delay_ms: u64) -> Self {
        Self {
            slides_per_view: 1,
            space_between: 30,
            looped: true,
            speed_ms: 800,
            autoplay_delay_ms,
            pause_on_interaction: true,
            breakpoints: vec![
                Breakpoint {
                    min_width: 768,
                    slides_per_view: 2,
                    space_between: 40,
                },
                Breakpoint {
                    min_width: 1024,
                    slides_per_view: 3,
                    space_between: 60,
                },
            ],
            nav_next: "swiper-button-next".to_string(),
            nav_prev: "swiper-button-prev".to_string(),
        }
    }
}

/// Lifecycle of the external carousel widget.
pub trait Carousel: Send {
    fn initialize(&mut self, config: &CarouselConfig);

    fn destroy(&mut self);

    fn is_initialized(&self) -> bool;

    /// Tear down any previous instance and start a fresh one over the
    /// current slide markup.
    fn reinitialize(&mut self, config: &CarouselConfig) {
        if self.is_initialized() {
            self.destroy();
        }
        self.initialize(config);
    }
}

/// Carousel that only tracks lifecycle state and logs transitions.
pub struct TracingCarousel {
    active: bool,
}

impl TracingCarousel {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl Default for TracingCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel for TracingCarousel {
    fn initialize(&mut self, config: &CarouselConfig) {
        debug!(
            "carousel initialized ({} breakpoints, autoplay {}ms)",
            config.breakpoints.len(),
            config.autoplay_delay_ms
        );
        self.active = true;
    }

    fn destroy(&mut self) {
        debug!("carousel destroyed");
        self.active = false;
    }

    fn is_initialized(&self) -> bool {
        self.active
    }
}
