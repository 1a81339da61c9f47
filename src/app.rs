//! Site orchestration: the language state manager and page-load flow.
//!
//! `Site` wires the pieces together: it owns the page model, the observable
//! language cell, the content store, and the two external collaborators
//! (animator, carousel). Page load and user-initiated language switches both
//! run through [`Site::switch_language`], so the first render and every later
//! switch share one code path.
//!
//! Every DOM lookup here is defensive: the same engine drives page variants
//! with different subsets of markup, and a missing region or node is a
//! normal, silent no-op.

use crate::animate::Animator;
use crate::carousel::{Carousel, CarouselConfig};
use crate::config::Config;
use crate::content::{ContentLoader, ContentStore, Resource};
use crate::dom::{Dir, Document, Node};
use crate::i18n::{Catalog, Language, LanguageRegistry};
use crate::render::{self, VideoStyle};
use crate::state::{LanguageEpoch, LanguageState};
use anyhow::{Context, Result};
use std::sync::{Mutex, RwLock, RwLockReadGuard};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// What the testimonial section is currently showing. Remembered explicitly:
/// re-localizing the panel after a language switch must follow the kind on
/// display, not the outcome of whatever fetch happened most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Unloaded,
    Slides(usize),
    Empty,
    Error,
}

/// Static translatable regions: (region id, node class, catalog key path).
/// Entries whose region, node or key is missing are skipped silently.
const STATIC_BINDINGS: &[(&str, &str, &str)] = &[
    ("hero", "hero-title-line", "hero.title"),
    ("hero", "hero-subtitle", "hero.subtitle"),
    ("hero", "scroll-label", "hero.scroll"),
    ("about", "section-title", "about.title"),
    ("about", "about-text", "about.text"),
    ("work", "section-title", "work.title"),
    ("work", "portfolio-subtitle", "work.subtitle"),
    ("work", "see-more-label", "work.viewMore"),
    ("services", "section-title", "services.title"),
    ("services", "services-subtitle", "services.subtitle"),
    ("contact", "section-title", "contact.title"),
    ("contact", "contact-phone", "contact.phone"),
    ("contact", "contact-email", "contact.email"),
    ("contact", "bio-link", "contact.bioLink"),
    ("contact", "business-card", "contact.businessCard"),
    ("work-page", "section-title", "work.title"),
    ("work-page", "work-subtitle", "work.subtitle"),
];

/// Nav links, in markup order.
const NAV_PATHS: &[&str] = &[
    "nav.home",
    "nav.about",
    "nav.work",
    "nav.services",
    "nav.testimonials",
    "nav.contact",
];

/// Service cards, in markup order.
const SERVICE_KEYS: &[&str] = &["videography", "social", "commercial", "event", "content"];

/// Regions that hold video embeds and must never mirror under RTL.
const MEDIA_REGIONS: &[&str] = &["videoGallery", "workGrid"];

/// Element classes forced left-to-right wherever they appear.
const MEDIA_CLASSES: &[&str] = &["testimonial-swiper", "swiper-slide", "reel-item", "work-item"];

/// The behavior layer of one loaded page.
pub struct Site {
    config: Config,
    state: LanguageState,
    store: ContentStore,
    page: RwLock<Document>,
    carousel: Mutex<Box<dyn Carousel>>,
    animator: Box<dyn Animator>,
    panel: RwLock<PanelState>,
    default_language: Language,
}

impl Site {
    pub fn new(
        config: Config,
        page: Document,
        animator: Box<dyn Animator>,
        carousel: Box<dyn Carousel>,
    ) -> Result<Self> {
        let default_language = Language::from_code(&config.default_language)
            .context("DEFAULT_LANGUAGE is not a supported language")?;

        let loader = ContentLoader::new(
            &config.content_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            state: LanguageState::new(),
            store: ContentStore::new(loader),
            page: RwLock::new(page),
            carousel: Mutex::new(carousel),
            animator,
            panel: RwLock::new(PanelState::Unloaded),
            default_language,
        })
    }

    // ==================== Accessors ====================

    /// Read access to the page model.
    pub fn page(&self) -> RwLockReadGuard<'_, Document> {
        self.page.read().unwrap()
    }

    /// The active language, `None` before boot.
    pub fn language(&self) -> Option<Language> {
        self.state.current()
    }

    /// What the testimonial section currently shows.
    pub fn testimonial_panel(&self) -> PanelState {
        *self.panel.read().unwrap()
    }

    /// Register a listener fired on every real language transition.
    pub fn on_language_change(&self, listener: impl Fn(Language) + Send + Sync + 'static) {
        self.state.subscribe(listener);
    }

    // ==================== Page load ====================

    /// Page-load sequence: build the switcher, apply the default language
    /// through the regular switch path, then load both collections. The two
    /// fetches are independent and run concurrently.
    pub async fn boot(&self) {
        info!("Booting page (default language: {})", self.default_language);
        {
            let mut page = self.page.write().unwrap();
            build_language_switcher(&mut page);
        }
        self.switch_language(self.default_language).await;

        tokio::join!(self.load_testimonials(), self.load_videos());
    }

    // ==================== Language switching ====================

    /// Forward a switcher click. Unknown codes are ignored with a warning.
    pub async fn select_language(&self, code: &str) {
        match Language::from_code(code) {
            Ok(lang) => self.switch_language(lang).await,
            Err(e) => warn!("Ignoring language selection: {e}"),
        }
    }

    /// Transition the whole page to `lang`. Re-applies every static
    /// translatable region and re-synchronizes testimonial text. Calling
    /// with the active language is a no-op.
    pub async fn switch_language(&self, lang: Language) {
        let Some(epoch) = self.state.set(lang) else {
            debug!("Language {} already active, nothing to do", lang);
            return;
        };
        info!("Switching language to {}", lang);

        {
            let mut page = self.page.write().unwrap();
            let dir = if lang.is_rtl() { Dir::Rtl } else { Dir::Ltr };
            page.set_language(lang.code(), dir);
            force_media_ltr(&mut page);
            mark_active_language(&mut page, lang);
            apply_static_text(&mut page, lang);
            page.pulse_opacity();
        }

        self.sync_testimonial_text(epoch).await;
    }

    // ==================== Content loading ====================

    /// Load the review collection and build the testimonial section:
    /// slides + carousel on success, a localized empty or error panel
    /// otherwise. The shown kind is remembered for later re-localization.
    pub async fn load_testimonials(&self) {
        let result = self.store.reviews().await;
        let lang = self.state.current().unwrap_or(self.default_language);

        match result {
            Ok(reviews) if reviews.is_empty() => {
                info!("No reviews available, showing empty state");
                *self.panel.write().unwrap() = PanelState::Empty;
                self.show_testimonial_panel(lang, "testimonials.empty");
                self.teardown_carousel();
            }
            Ok(reviews) => {
                *self.panel.write().unwrap() = PanelState::Slides(reviews.len());
                {
                    let mut page = self.page.write().unwrap();
                    let Some(region) = page.region_mut("testimonials") else {
                        return;
                    };
                    if let Some(panel) = region.find_by_class_mut("testimonial-empty-state") {
                        panel.set_hidden(true);
                    }
                    set_carousel_nav_hidden(region, false);
                    if let Some(wrapper) = region.find_by_class_mut("swiper-wrapper") {
                        let built = render::render_testimonial_slides(
                            wrapper,
                            "testimonials",
                            &reviews,
                            self.animator.as_ref(),
                        );
                        info!("Built {} testimonial slides", built);
                    }
                }
                {
                    let mut carousel = self.carousel.lock().unwrap();
                    carousel
                        .reinitialize(&CarouselConfig::testimonials(self.config.carousel_autoplay_ms));
                }
                // Inject current-language text into the fresh placeholders.
                self.sync_testimonial_text(self.state.epoch()).await;
            }
            Err(e) => {
                error!("Error loading testimonials: {e}");
                *self.panel.write().unwrap() = PanelState::Error;
                self.show_testimonial_panel(lang, "testimonials.error");
                self.teardown_carousel();
            }
        }
    }

    /// Load videos into whichever video mount this page variant carries:
    /// the homepage gallery (limited) or the work-page grid (all). A video
    /// failure never blocks the rest of the page.
    pub async fn load_videos(&self) {
        let target = {
            let page = self.page.read().unwrap();
            if page.region("videoGallery").is_some() {
                Some((
                    "videoGallery",
                    VideoStyle::Reel,
                    Some(self.config.home_video_limit),
                ))
            } else if page.region("workGrid").is_some() {
                Some(("workGrid", VideoStyle::Work, None))
            } else {
                None
            }
        };
        let Some((mount_id, style, limit)) = target else {
            debug!("No video mount on this page variant");
            return;
        };

        let result = self.store.videos().await;
        let lang = self.state.current().unwrap_or(self.default_language);

        let mut page = self.page.write().unwrap();
        let Some(mount) = page.region_mut(mount_id) else {
            return;
        };

        match result {
            Ok(videos) if videos.is_empty() => {
                info!("No videos available, showing empty state");
                render::render_status(mount, lang, "work.empty.title", "work.empty.message");
            }
            Ok(videos) => {
                let shown = render::render_videos(
                    mount,
                    mount_id,
                    &videos,
                    style,
                    limit,
                    self.animator.as_ref(),
                );
                info!("Rendered {} of {} videos into #{}", shown, videos.len(), mount_id);
            }
            Err(e) => {
                error!("Error loading videos: {e}");
                render::render_status(mount, lang, "work.error.title", "work.error.message");
            }
        }
    }

    /// Drop the cached copy of a resource. The next load re-fetches it; until
    /// then, renders keep projecting from what is on screen.
    pub fn invalidate(&self, resource: Resource) {
        self.store.invalidate(resource);
    }

    /// Drop the cached reviews and rebuild the testimonial section. The only
    /// way review content refreshes within a page's lifetime.
    pub async fn refresh_testimonials(&self) {
        self.invalidate(Resource::Reviews);
        self.load_testimonials().await;
    }

    /// Drop the cached videos and re-render the video mount.
    pub async fn refresh_videos(&self) {
        self.invalidate(Resource::Videos);
        self.load_videos().await;
    }

    // ==================== Testimonial text synchronization ====================

    /// Write current-language review text into every rendered slide
    /// placeholder and re-localize the section heading and any visible
    /// empty/error panel.
    ///
    /// `epoch` is the transition this work belongs to. When a later switch
    /// lands while the review fetch is in flight, the stale completion
    /// applies nothing — the language read at response time is the one that
    /// counts.
    pub async fn sync_testimonial_text(&self, epoch: LanguageEpoch) {
        let reviews = match self.store.reviews().await {
            Ok(reviews) => Some(reviews),
            Err(e) => {
                warn!("Error fetching reviews for language update: {e}");
                None
            }
        };

        if !self.state.is_current(epoch) {
            debug!("Testimonial sync superseded by a newer language switch");
            return;
        }
        let Some(lang) = self.state.current() else {
            return;
        };

        let panel_state = *self.panel.read().unwrap();
        let mut page = self.page.write().unwrap();
        let Some(region) = page.region_mut("testimonials") else {
            return;
        };

        if let Some(reviews) = &reviews {
            region.for_each_mut(&mut |node| {
                let Some(index) = node
                    .attr("data-review-key")
                    .and_then(|key| key.parse::<usize>().ok())
                else {
                    return;
                };
                // A review without text for this language keeps whatever
                // text it last showed.
                if let Some(text) = reviews.get(index).and_then(|r| r.text_for(lang)) {
                    node.set_text(text);
                }
            });
        }

        if let Some(text) = Catalog::get(lang, "testimonials.title") {
            if let Some(heading) = region.find_by_class_mut("section-title") {
                heading.set_text(text);
            }
        }

        let prefix = match panel_state {
            PanelState::Empty => "testimonials.empty",
            PanelState::Error => "testimonials.error",
            PanelState::Unloaded | PanelState::Slides(_) => return,
        };
        if let Some(panel) = region.find_by_class_mut("testimonial-empty-state") {
            if !panel.is_hidden() {
                render::localize_panel(
                    panel,
                    lang,
                    &format!("{prefix}.title"),
                    &format!("{prefix}.message"),
                );
            }
        }
    }

    // ==================== Internals ====================

    /// Clear the slides and surface the empty/error panel, localized from
    /// the `{key_prefix}.title` / `{key_prefix}.message` catalog entries.
    fn show_testimonial_panel(&self, lang: Language, key_prefix: &str) {
        let mut page = self.page.write().unwrap();
        let Some(region) = page.region_mut("testimonials") else {
            return;
        };
        if let Some(wrapper) = region.find_by_class_mut("swiper-wrapper") {
            wrapper.clear_children();
        }
        if let Some(panel) = region.find_by_class_mut("testimonial-empty-state") {
            panel.set_hidden(false);
            render::localize_panel(
                panel,
                lang,
                &format!("{key_prefix}.title"),
                &format!("{key_prefix}.message"),
            );
        }
        set_carousel_nav_hidden(region, true);
    }

    fn teardown_carousel(&self) {
        let mut carousel = self.carousel.lock().unwrap();
        if carousel.is_initialized() {
            carousel.destroy();
        }
    }
}

/// Build the clickable language selector into the nav container, one option
/// per registry entry plus the sliding active marker. Idempotent.
fn build_language_switcher(page: &mut Document) {
    let Some(nav) = page.region_mut("nav") else {
        return;
    };
    let Some(container) = nav.find_by_class_mut("nav-container") else {
        return;
    };
    if container.find_by_class("language-switcher").is_some() {
        return;
    }

    let mut toggle = Node::new("div").with_class("language-toggle");
    for config in LanguageRegistry::get().list() {
        toggle.append(
            Node::new("div")
                .with_class("language-option")
                .with_attr("data-lang", config.code)
                .with_text(config.switch_label),
        );
    }
    toggle.append(Node::new("div").with_class("language-slider"));

    container.append(
        Node::new("div")
            .with_class("language-switcher")
            .with_child(toggle),
    );
}

/// Move the active marker to the selected language's option.
fn mark_active_language(page: &mut Document, lang: Language) {
    let Some(nav) = page.region_mut("nav") else {
        return;
    };
    nav.for_each_mut(&mut |node| {
        if node.has_class("language-option") {
            if node.attr("data-lang") == Some(lang.code()) {
                node.add_class("active");
            } else {
                node.remove_class("active");
            }
        } else if node.has_class("language-slider") {
            node.set_attr("data-active-lang", lang.code());
        }
    });
}

/// Re-apply every static translatable region from the catalog. Missing
/// regions, nodes and key paths are all skipped without error.
fn apply_static_text(page: &mut Document, lang: Language) {
    for (region_id, class, path) in STATIC_BINDINGS {
        let Some(text) = Catalog::get(lang, path) else {
            continue;
        };
        if let Some(region) = page.region_mut(region_id) {
            if let Some(node) = region.find_by_class_mut(class) {
                node.set_text(text);
            }
        }
    }

    // Nav links are matched to key paths by position.
    if let Some(nav) = page.region_mut("nav") {
        if let Some(menu) = nav.find_by_class_mut("nav-menu") {
            let mut index = 0;
            for link in menu.children_mut() {
                if !link.has_class("nav-link") {
                    continue;
                }
                if let Some(text) = NAV_PATHS.get(index).and_then(|path| Catalog::get(lang, path)) {
                    link.set_text(text);
                }
                index += 1;
            }
        }
    }

    // Service cards are matched to item keys by position.
    if let Some(services) = page.region_mut("services") {
        if let Some(grid) = services.find_by_class_mut("services-grid") {
            let mut index = 0;
            for item in grid.children_mut() {
                if !item.has_class("service-item") {
                    continue;
                }
                let Some(key) = SERVICE_KEYS.get(index) else {
                    break;
                };
                index += 1;

                if let Some(text) = Catalog::get(lang, &format!("services.items.{key}.title")) {
                    if let Some(title) = item.find_mut(&|n| n.tag() == "h3") {
                        title.set_text(text);
                    }
                }
                if let Some(text) = Catalog::get(lang, &format!("services.items.{key}.desc")) {
                    if let Some(desc) = item.find_mut(&|n| n.tag() == "p") {
                        desc.set_text(text);
                    }
                }
            }
        }
    }
}

/// Video and testimonial embeds keep left-to-right layout regardless of the
/// page direction.
fn force_media_ltr(page: &mut Document) {
    for id in MEDIA_REGIONS {
        if let Some(region) = page.region_mut(id) {
            region.set_attr("dir", "ltr");
        }
    }

    let ids: Vec<String> = page.region_ids().map(str::to_string).collect();
    for id in ids {
        if let Some(region) = page.region_mut(&id) {
            region.for_each_mut(&mut |node| {
                if MEDIA_CLASSES.iter().any(|class| node.has_class(class)) {
                    node.set_attr("dir", "ltr");
                }
            });
        }
    }
}

/// Show or hide the carousel's prev/next arrows.
fn set_carousel_nav_hidden(region: &mut Node, hidden: bool) {
    region.for_each_mut(&mut |node| {
        if node.has_class("swiper-button-prev") || node.has_class("swiper-button-next") {
            node.set_hidden(hidden);
        }
    });
}
