//! Translation catalog: static per-language string trees.
//!
//! Each language defines one fixed-shape nested tree mirroring the page's
//! sections. Lookup is by dot-separated key path
//! (`"services.items.videography.title"`) and is pure: no fallback is
//! performed here. Call sites decide what to do with an absent value — the
//! site-wide policy is to skip the update and leave previously rendered text
//! in place, which keeps page variants that lack a section working.

use crate::i18n::Language;

/// A node in a translation tree: either a translated string or a nested
/// section.
#[derive(Debug)]
pub enum Tree {
    Leaf(&'static str),
    Branch(&'static [(&'static str, Tree)]),
}

use Tree::{Branch, Leaf};

impl Tree {
    /// Look up a dot-separated key path below this node.
    pub fn get(&self, path: &str) -> Option<&'static str> {
        let mut node = self;
        for segment in path.split('.') {
            match node {
                Branch(entries) => {
                    node = &entries.iter().find(|(key, _)| *key == segment)?.1;
                }
                Leaf(_) => return None,
            }
        }
        match node {
            Leaf(text) => Some(*text),
            Branch(_) => None,
        }
    }

    /// All leaf key paths below this node, in source order.
    pub fn key_paths(&self) -> Vec<String> {
        fn walk(tree: &Tree, prefix: &str, out: &mut Vec<String>) {
            if let Branch(entries) = tree {
                for (key, value) in *entries {
                    let path = if prefix.is_empty() {
                        (*key).to_string()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    match value {
                        Leaf(_) => out.push(path),
                        Branch(_) => walk(value, &path, out),
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(self, "", &mut out);
        out
    }
}

/// Static per-language translation catalog.
pub struct Catalog;

impl Catalog {
    /// The whole tree for a language.
    pub fn tree(lang: Language) -> &'static Tree {
        match lang.code() {
            "nl" => &DUTCH_TREE,
            "ar" => &ARABIC_TREE,
            _ => &ENGLISH_TREE,
        }
    }

    /// `get(lang, path) -> string | absent`. Pure lookup, no side effects,
    /// no fallback.
    pub fn get(lang: Language, path: &str) -> Option<&'static str> {
        Self::tree(lang).get(path)
    }
}

// ==================== English (reference) ====================

static ENGLISH_TREE: Tree = Branch(&[
    (
        "nav",
        Branch(&[
            ("home", Leaf("Home")),
            ("about", Leaf("About")),
            ("work", Leaf("Work")),
            ("services", Leaf("Services")),
            ("testimonials", Leaf("Testimonials")),
            ("contact", Leaf("Contact")),
        ]),
    ),
    (
        "hero",
        Branch(&[
            ("title", Leaf("A D N A N")),
            (
                "subtitle",
                Leaf("Professional Videographer & Social Media Marketer"),
            ),
            ("scroll", Leaf("Scroll to explore")),
        ]),
    ),
    (
        "about",
        Branch(&[
            ("title", Leaf("About Me")),
            (
                "text",
                Leaf(
                    "Adnan Kousa is a creative professional who turns ideas into cinematic \
                     stories. As a videographer and social media marketer, Adnan helps brands, \
                     artists, and entrepreneurs grow through visual storytelling and digital \
                     content strategy.",
                ),
            ),
        ]),
    ),
    (
        "work",
        Branch(&[
            ("title", Leaf("My Work")),
            ("subtitle", Leaf("Latest videos showcasing my creative vision")),
            ("viewMore", Leaf("View More Videos")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("No videos available at the moment.")),
                    ("message", Leaf("Check back soon for new content.")),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("Error Loading Videos")),
                    (
                        "message",
                        Leaf("Please check your connection and refresh the page."),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "services",
        Branch(&[
            ("title", Leaf("Services")),
            (
                "subtitle",
                Leaf("Professional creative services tailored to your needs"),
            ),
            (
                "items",
                Branch(&[
                    (
                        "videography",
                        Branch(&[
                            ("title", Leaf("Videography")),
                            (
                                "desc",
                                Leaf(
                                    "Professional shooting and editing for all your visual needs. \
                                     From concept to final cut, we create stunning visuals that \
                                     tell your story.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "social",
                        Branch(&[
                            ("title", Leaf("Social Media Marketing")),
                            (
                                "desc",
                                Leaf(
                                    "Strategic content creation, ad campaigns, and growth \
                                     strategies across platforms. Build your brand presence and \
                                     engage your audience effectively.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "commercial",
                        Branch(&[
                            ("title", Leaf("Commercials & Ads")),
                            (
                                "desc",
                                Leaf(
                                    "High-impact commercial production for brands and businesses. \
                                     Create compelling advertisements that drive results and \
                                     elevate your brand.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "event",
                        Branch(&[
                            ("title", Leaf("Event Videography")),
                            (
                                "desc",
                                Leaf(
                                    "Complete event coverage with cinematic storytelling approach. \
                                     Capture every moment of your special events with professional \
                                     quality.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "content",
                        Branch(&[
                            ("title", Leaf("Content Creation")),
                            (
                                "desc",
                                Leaf(
                                    "Platform-specific content for Instagram, TikTok and YouTube. \
                                     Stay relevant with trending content that resonates with your \
                                     audience.",
                                ),
                            ),
                        ]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "testimonials",
        Branch(&[
            ("title", Leaf("Client Stories")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("No client stories yet.")),
                    (
                        "message",
                        Leaf("Check back soon to read what clients have to say."),
                    ),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("Could not load client stories")),
                    (
                        "message",
                        Leaf("Please check your connection and refresh the page."),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "contact",
        Branch(&[
            ("title", Leaf("Let's Create Together")),
            ("phone", Leaf("+31soon000")),
            ("email", Leaf("adnankousa24@gmail.com")),
            ("bioLink", Leaf("Bio Link")),
            ("businessCard", Leaf("Business Card")),
        ]),
    ),
]);

// ==================== Dutch ====================

static DUTCH_TREE: Tree = Branch(&[
    (
        "nav",
        Branch(&[
            ("home", Leaf("Home")),
            ("about", Leaf("Over Mij")),
            ("work", Leaf("Werk")),
            ("services", Leaf("Diensten")),
            ("testimonials", Leaf("Referenties")),
            ("contact", Leaf("Contact")),
        ]),
    ),
    (
        "hero",
        Branch(&[
            ("title", Leaf("A D N A N")),
            (
                "subtitle",
                Leaf("Professionele Videograaf & Social Media Marketeer"),
            ),
            ("scroll", Leaf("Ontdek meer")),
        ]),
    ),
    (
        "about",
        Branch(&[
            ("title", Leaf("Over Mij")),
            (
                "text",
                Leaf(
                    "Adnan Kousa is een creatieve professional die ideeën omzet in cinematische \
                     verhalen. Als videograaf en social media marketeer helpt Adnan merken, \
                     artiesten en ondernemers te groeien door visueel storytelling en digitale \
                     contentstrategie.",
                ),
            ),
        ]),
    ),
    (
        "work",
        Branch(&[
            ("title", Leaf("Mijn Werk")),
            (
                "subtitle",
                Leaf("Nieuwste video's die mijn creatieve visie tonen"),
            ),
            ("viewMore", Leaf("Meer Video's Bekijken")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("Er zijn momenteel geen video's beschikbaar.")),
                    ("message", Leaf("Kom binnenkort terug voor nieuwe content.")),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("Fout bij het laden van video's")),
                    (
                        "message",
                        Leaf("Controleer uw verbinding en vernieuw de pagina."),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "services",
        Branch(&[
            ("title", Leaf("Diensten")),
            ("subtitle", Leaf("Professionele creatieve diensten op maat")),
            (
                "items",
                Branch(&[
                    (
                        "videography",
                        Branch(&[
                            ("title", Leaf("Videografie")),
                            (
                                "desc",
                                Leaf(
                                    "Professionele opnames, montage en dronebeelden voor al uw \
                                     visuele behoeften. Van concept tot eindmontage creëren we \
                                     prachtige beelden die uw verhaal vertellen.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "social",
                        Branch(&[
                            ("title", Leaf("Social Media Marketing")),
                            (
                                "desc",
                                Leaf(
                                    "Strategische contentcreatie, advertentiecampagnes en \
                                     groeistrategieën op alle platforms. Bouw uw merk aanwezigheid \
                                     op en betrek uw publiek effectief.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "commercial",
                        Branch(&[
                            ("title", Leaf("Commercials & Ads")),
                            (
                                "desc",
                                Leaf(
                                    "Impactvolle commercial productie voor merken en bedrijven. \
                                     Creëer boeiende advertenties die resultaten opleveren en uw \
                                     merk verheffen.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "event",
                        Branch(&[
                            ("title", Leaf("Event Videografie")),
                            (
                                "desc",
                                Leaf(
                                    "Tegelijkertijd eventdekking met een cinematografische \
                                     storytelling aanpak. Leg elk moment van uw speciale \
                                     gebeurtenissen vast met professionele kwaliteit.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "content",
                        Branch(&[
                            ("title", Leaf("Content Creatie")),
                            (
                                "desc",
                                Leaf(
                                    "Platform-specifieke content voor Instagram, TikTok en \
                                     YouTube. Blijf relevant met trending content die resoneert \
                                     met uw publiek.",
                                ),
                            ),
                        ]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "testimonials",
        Branch(&[
            ("title", Leaf("Klantverhalen")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("Nog geen klantverhalen.")),
                    (
                        "message",
                        Leaf("Kom binnenkort terug om te lezen wat klanten te zeggen hebben."),
                    ),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("Klantverhalen konden niet worden geladen")),
                    (
                        "message",
                        Leaf("Controleer uw verbinding en vernieuw de pagina."),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "contact",
        Branch(&[
            ("title", Leaf("Laten We Creëren")),
            ("phone", Leaf("+31soon000")),
            ("email", Leaf("adnankousa24@gmail.com")),
            ("bioLink", Leaf("Bio Link")),
            ("businessCard", Leaf("Visitekaartje")),
        ]),
    ),
]);

// ==================== Arabic ====================

static ARABIC_TREE: Tree = Branch(&[
    (
        "nav",
        Branch(&[
            ("home", Leaf("الرئيسية")),
            ("about", Leaf("عنّي")),
            ("work", Leaf("أعمالي")),
            ("services", Leaf("الخدمات")),
            ("testimonials", Leaf("آراء العملاء")),
            ("contact", Leaf("تواصل")),
        ]),
    ),
    (
        "hero",
        Branch(&[
            ("title", Leaf("A D N A N")),
            ("subtitle", Leaf("مصور فيديو ومسوق لوسائل التواصل الاجتماعي")),
            ("scroll", Leaf("استكشف")),
        ]),
    ),
    (
        "about",
        Branch(&[
            ("title", Leaf("عنّي")),
            (
                "text",
                Leaf(
                    "عدنان يساعد العلامات التجارية على الظهور بشكل احترافي وجذاب من خلال \
                     الفيديوهات، الصور، والإعلانات الرقمية. يمزج بين الإبداع والمعرفة التسويقية \
                     ليصنع محتوى يلفت الانتباه ويترك أثر. شغفه هو تحويل الأفكار إلى صور \
                     تنحكى… وتتشارك.",
                ),
            ),
        ]),
    ),
    (
        "work",
        Branch(&[
            ("title", Leaf("أعمالي")),
            ("subtitle", Leaf("أحدث مقاطع الفيديو التي تعرض رؤيتي الإبداعية")),
            ("viewMore", Leaf("عرض المزيد من الفيديوهات")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("لا توجد فيديوهات متاحة حاليًا.")),
                    ("message", Leaf("عد قريبًا لمحتوى جديد.")),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("خطأ في تحميل الفيديوهات")),
                    ("message", Leaf("يرجى التحقق من الاتصال وتحديث الصفحة.")),
                ]),
            ),
        ]),
    ),
    (
        "services",
        Branch(&[
            ("title", Leaf("الخدمات")),
            ("subtitle", Leaf("خدمات إبداعية احترافية مصممة حسب احتياجاتك")),
            (
                "items",
                Branch(&[
                    (
                        "videography",
                        Branch(&[
                            ("title", Leaf("تصوير الفيديو")),
                            (
                                "desc",
                                Leaf(
                                    "تصوير ومونتاج احترافي لجميع احتياجاتك البصرية. من الفكرة إلى \
                                     اللقطة النهائية، نحن نخلق لقطات مذهلة تروي قصتك.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "social",
                        Branch(&[
                            ("title", Leaf("تسويق وسائل التواصل")),
                            (
                                "desc",
                                Leaf(
                                    "إنشاء محتوى استراتيجي، حملات إعلانية، واستراتيجيات نمو عبر \
                                     جميع المنصات. بناء حضور علامتك التجارية والتفاعل مع جمهورك \
                                     بشكل فعال.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "commercial",
                        Branch(&[
                            ("title", Leaf("فيديوهات إعلانية")),
                            (
                                "desc",
                                Leaf(
                                    "إنتاج فيديو إعلاني عالي التأثير للعلامات التجارية والشركات. \
                                     إنشاء إعلانات جذابة تحقق نتائج وتعزز علامتك التجارية.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "event",
                        Branch(&[
                            ("title", Leaf("تصوير المناسبات")),
                            (
                                "desc",
                                Leaf(
                                    "تغطية كاملة للمناسبات مع نهج سينمائي للسرد. التقاط كل لحظة \
                                     من مناسباتك الخاصة بجودة احترافية.",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "content",
                        Branch(&[
                            ("title", Leaf("إنشاء المحتوى")),
                            (
                                "desc",
                                Leaf(
                                    "محتوى مخصص للمنصات مثل إنستغرام، تيك توك ويوتيوب. محتوى \
                                     يتناسب مع جمهورك ويعكس تطلعاتهم.",
                                ),
                            ),
                        ]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "testimonials",
        Branch(&[
            ("title", Leaf("قصص العملاء")),
            (
                "empty",
                Branch(&[
                    ("title", Leaf("لا توجد قصص عملاء بعد.")),
                    ("message", Leaf("عد قريبًا لقراءة آراء عملائنا.")),
                ]),
            ),
            (
                "error",
                Branch(&[
                    ("title", Leaf("تعذر تحميل قصص العملاء")),
                    ("message", Leaf("يرجى التحقق من الاتصال وتحديث الصفحة.")),
                ]),
            ),
        ]),
    ),
    (
        "contact",
        Branch(&[
            ("title", Leaf("لنبدع معًا")),
            ("phone", Leaf("+31soon000")),
            ("email", Leaf("adnankousa24@gmail.com")),
            ("bioLink", Leaf("رابط السيرة")),
            ("businessCard", Leaf("بطاقة العمل")),
        ]),
    ),
]);
