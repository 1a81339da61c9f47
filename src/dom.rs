//! In-memory page model.
//!
//! The engine renders into a `Document` of named mount-point regions, each an
//! element `Node` tree. Regions are optional by design: the same behavior
//! layer drives several page variants with different subsets of markup, so
//! every lookup returns `Option` and callers treat "not found" as a normal,
//! silent no-op.

use std::collections::BTreeMap;

/// Text directionality of the document or an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Ltr,
    Rtl,
}

impl Dir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

/// An element node: tag, attributes, text content, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    // ==================== Builders ====================

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Append a class to the `class` attribute.
    pub fn with_class(mut self, class: &str) -> Self {
        let classes = self.attrs.entry("class".to_string()).or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    // ==================== Accessors ====================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Add a class if absent.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            let classes = self.attrs.entry("class".to_string()).or_default();
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(class);
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        if let Some(classes) = self.attrs.get_mut("class") {
            *classes = classes
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Hidden elements stay in the tree but are not shown.
    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set_attr("hidden", "hidden");
        } else {
            self.remove_attr("hidden");
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.attr("hidden").is_some()
    }

    // ==================== Children ====================

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    // ==================== Queries ====================

    /// First descendant (or self) matching the predicate, depth-first.
    pub fn find(&self, pred: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// Mutable variant of [`Node::find`].
    pub fn find_mut(&mut self, pred: &dyn Fn(&Node) -> bool) -> Option<&mut Node> {
        if pred(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(pred))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        self.find(&|node| node.has_class(class))
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Node> {
        self.find_mut(&|node| node.has_class(class))
    }

    /// Visit self and every descendant, depth-first.
    pub fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Node)) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }

    /// Count descendants (including self) matching the predicate.
    pub fn count(&self, pred: &dyn Fn(&Node) -> bool) -> usize {
        let mut total = usize::from(pred(self));
        for child in &self.children {
            total += child.count(pred);
        }
        total
    }
}

/// The page: document-level language/direction plus named mount regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lang: String,
    dir: Dir,
    regions: BTreeMap<String, Node>,
    opacity_pulses: usize,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lang: "en".to_string(),
            dir: Dir::Ltr,
            regions: BTreeMap::new(),
            opacity_pulses: 0,
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn set_language(&mut self, lang: &str, dir: Dir) {
        self.lang = lang.to_string();
        self.dir = dir;
    }

    pub fn insert_region(&mut self, id: &str, root: Node) {
        self.regions.insert(id.to_string(), root);
    }

    pub fn region(&self, id: &str) -> Option<&Node> {
        self.regions.get(id)
    }

    pub fn region_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.regions.get_mut(id)
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Record the brief whole-page opacity pulse used as a visual cue when
    /// the language changes. Cosmetic only; the host consumes the count.
    pub fn pulse_opacity(&mut self) {
        self.opacity_pulses += 1;
    }

    pub fn opacity_pulses(&self) -> usize {
        self.opacity_pulses
    }

    // ==================== Page scaffolds ====================

    /// Markup skeleton of the homepage: nav, hero, about, work (with the
    /// limited video gallery), services, testimonials, contact.
    pub fn home() -> Self {
        let mut doc = Self::new();

        doc.insert_region("nav", nav_region());
        doc.insert_region(
            "hero",
            Node::new("section")
                .with_child(Node::new("h1").with_class("hero-title-line"))
                .with_child(Node::new("p").with_class("hero-subtitle"))
                .with_child(
                    Node::new("div")
                        .with_class("scroll-indicator")
                        .with_child(Node::new("span").with_class("scroll-label")),
                ),
        );
        doc.insert_region(
            "about",
            Node::new("section")
                .with_child(Node::new("h2").with_class("section-title"))
                .with_child(Node::new("p").with_class("about-text")),
        );
        doc.insert_region(
            "work",
            Node::new("section")
                .with_child(Node::new("h2").with_class("section-title"))
                .with_child(Node::new("p").with_class("portfolio-subtitle"))
                .with_child(
                    Node::new("a")
                        .with_class("see-more-btn")
                        .with_child(Node::new("span").with_class("see-more-label")),
                ),
        );
        doc.insert_region(
            "videoGallery",
            Node::new("div").with_class("reels-grid"),
        );
        doc.insert_region("services", services_region());
        doc.insert_region("testimonials", testimonials_region());
        doc.insert_region(
            "contact",
            Node::new("section")
                .with_child(Node::new("h2").with_class("section-title"))
                .with_child(Node::new("span").with_class("contact-phone"))
                .with_child(Node::new("span").with_class("contact-email"))
                .with_child(Node::new("a").with_class("bio-link"))
                .with_child(Node::new("a").with_class("business-card")),
        );

        doc
    }

    /// Markup skeleton of the work page: nav, page heading, and the full
    /// video grid. Deliberately lacks most homepage regions to exercise the
    /// missing-target tolerance.
    pub fn work() -> Self {
        let mut doc = Self::new();

        doc.insert_region("nav", nav_region());
        doc.insert_region(
            "work-page",
            Node::new("section")
                .with_child(Node::new("h2").with_class("section-title"))
                .with_child(Node::new("p").with_class("work-subtitle")),
        );
        doc.insert_region("workGrid", Node::new("div").with_class("work-grid"));

        doc
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn nav_region() -> Node {
    let mut menu = Node::new("ul").with_class("nav-menu");
    for _ in 0..6 {
        menu.append(Node::new("a").with_class("nav-link"));
    }
    Node::new("nav")
        .with_class("navbar")
        .with_child(Node::new("div").with_class("nav-container").with_child(menu))
}

fn services_region() -> Node {
    let mut grid = Node::new("div").with_class("services-grid");
    for _ in 0..5 {
        grid.append(
            Node::new("div")
                .with_class("service-item")
                .with_child(Node::new("h3"))
                .with_child(Node::new("p")),
        );
    }
    Node::new("section")
        .with_child(Node::new("h2").with_class("section-title"))
        .with_child(Node::new("p").with_class("services-subtitle"))
        .with_child(grid)
}

fn testimonials_region() -> Node {
    let mut empty_state = Node::new("div")
        .with_class("testimonial-empty-state")
        .with_child(Node::new("h3"))
        .with_child(Node::new("p"));
    empty_state.set_hidden(true);

    Node::new("section")
        .with_child(Node::new("h2").with_class("section-title"))
        .with_child(
            Node::new("div")
                .with_class("testimonial-swiper")
                .with_child(Node::new("div").with_class("swiper-wrapper")),
        )
        .with_child(empty_state)
        .with_child(Node::new("div").with_class("swiper-button-prev"))
        .with_child(Node::new("div").with_class("swiper-button-next"))
}
