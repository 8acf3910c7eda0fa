use std::fmt;

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");
const ONESHOT_JSON: &str = include_str!("../content/oneshot.json");
const QQSC_JSON: &str = include_str!("../content/qqsc.json");

/// Site-wide identity used by the navigation bar and the document head.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Site {
    pub name: String,
    pub brand: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Rose,
    Green,
    Amber,
    Gold,
}

impl Tone {
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Rose => "#fb7185",
            Tone::Green => "#22c55e",
            Tone::Amber => "#f59e0b",
            Tone::Gold => "#e8a838",
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub accent: Tone,
    /// Color of the left hero glow; the right one is always rose.
    pub glow: Tone,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    pub summary: String,
    pub tech: Vec<String>,
}

/// One image-plus-caption unit.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContentEntry {
    pub src: String,
    pub label: String,
    pub sublabel: String,
}

/// Decorative wrapper applied to every entry of a flow or gallery.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Screenshot,
    Phone,
    Display,
}

impl FrameKind {
    /// Intrinsic `(width, height)` of the assets shown in this frame.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            FrameKind::Screenshot => (1200, 800),
            FrameKind::Phone => (220, 476),
            FrameKind::Display => (1080, 608),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Flow {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub frame: FrameKind,
    pub entries: Vec<ContentEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ChallengePair {
    pub challenge: String,
    pub solution: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardBody {
    Text { text: String },
    List { items: Vec<String> },
    Pairs { pairs: Vec<ChallengePair> },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub heading: String,
    pub tone: Tone,
    /// List marker color, the heading tone when absent.
    #[serde(default)]
    pub bullet: Option<Tone>,
    /// Spans both columns of the details grid.
    #[serde(default)]
    pub wide: bool,
    pub body: CardBody,
}

impl Card {
    pub fn bullet_tone(&self) -> Tone {
        self.bullet.unwrap_or(self.tone)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Flows { flows: Vec<Flow> },
    Gallery { frame: FrameKind, entries: Vec<ContentEntry> },
    Details { cards: Vec<Card> },
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Narrow,
    #[default]
    Regular,
    Wide,
}

impl Width {
    pub fn class(self) -> &'static str {
        match self {
            Width::Narrow => "container-narrow",
            Width::Regular => "container-regular",
            Width::Wide => "container-wide",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub label: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub tinted: bool,
    #[serde(default)]
    pub width: Width,
    pub body: SectionBody,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Footer {
    #[serde(default)]
    pub cta: Option<ExternalLink>,
    pub credit: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub slug: String,
    pub meta: PageMeta,
    pub theme: Theme,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

#[derive(Debug)]
pub enum ContentError {
    Malformed {
        document: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Malformed { document, source } => {
                write!(f, "content document {} is malformed: {}", document, source)
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Malformed { source, .. } => Some(source),
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(document: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Malformed { document, source })
}

pub fn site() -> Result<Site, ContentError> {
    parse("site.json", SITE_JSON)
}

pub fn oneshot() -> Result<CaseStudy, ContentError> {
    parse("oneshot.json", ONESHOT_JSON)
}

pub fn qqsc() -> Result<CaseStudy, ContentError> {
    parse("qqsc.json", QQSC_JSON)
}

/// Percent-encodes each path segment so asset names with spaces resolve.
pub fn asset_url(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every entry of every flow and gallery, in presentation order.
    fn entries(study: &CaseStudy) -> Vec<(FrameKind, &ContentEntry)> {
        let mut entries = Vec::new();
        for section in &study.sections {
            match &section.body {
                SectionBody::Flows { flows } => {
                    for flow in flows {
                        entries.extend(flow.entries.iter().map(|entry| (flow.frame, entry)));
                    }
                }
                SectionBody::Gallery { frame, entries: gallery } => {
                    entries.extend(gallery.iter().map(|entry| (*frame, entry)));
                }
                SectionBody::Details { .. } => {}
            }
        }
        entries
    }

    fn flow<'a>(study: &'a CaseStudy, title: &str) -> &'a Flow {
        study
            .sections
            .iter()
            .filter_map(|section| match &section.body {
                SectionBody::Flows { flows } => Some(flows),
                _ => None,
            })
            .flatten()
            .find(|flow| flow.title == title)
            .unwrap_or_else(|| panic!("missing flow {}", title))
    }

    #[test]
    fn all_documents_decode() {
        site().unwrap();
        oneshot().unwrap();
        qqsc().unwrap();
    }

    #[test]
    fn every_page_has_metadata() {
        let site = site().unwrap();
        assert!(!site.title.is_empty());
        assert!(!site.description.is_empty());
        for study in [oneshot().unwrap(), qqsc().unwrap()] {
            assert!(!study.meta.title.trim().is_empty(), "{} has no title", study.slug);
            assert!(!study.meta.description.trim().is_empty(), "{} has no description", study.slug);
        }
    }

    #[test]
    fn welcome_flow_keeps_declaration_order() {
        let study = qqsc().unwrap();
        let welcome = flow(&study, "Welcome & Entry");
        let labels: Vec<&str> = welcome.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Login", "Profile"]);
        assert_eq!(welcome.frame, FrameKind::Phone);
    }

    #[test]
    fn oneshot_layout() {
        let study = oneshot().unwrap();
        assert_eq!(study.sections.len(), 4);
        assert_eq!(study.hero.tech, ["Next.js", "TypeScript", "Supabase", "OpenAI", "Stripe"]);
        assert!(entries(&study).iter().all(|(frame, _)| *frame == FrameKind::Screenshot));
        assert_eq!(entries(&study).len(), 7);

        let cta = study.footer.cta.as_ref().unwrap();
        assert_eq!(cta.href, "https://oneshothiring.com");

        let pairs = study
            .sections
            .iter()
            .find_map(|section| match &section.body {
                SectionBody::Details { cards } => cards.iter().find_map(|card| match &card.body {
                    CardBody::Pairs { pairs } => Some(pairs),
                    _ => None,
                }),
                _ => None,
            })
            .unwrap();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].challenge, "Video recording across devices");
    }

    #[test]
    fn qqsc_layout() {
        let study = qqsc().unwrap();
        assert_eq!(study.sections.len(), 3);
        assert!(study.footer.cta.is_none());
        assert!(matches!(
            study.sections[1].body,
            SectionBody::Gallery { frame: FrameKind::Display, .. }
        ));
        let frames: Vec<FrameKind> = entries(&study).iter().map(|(frame, _)| *frame).collect();
        assert_eq!(frames.iter().filter(|f| **f == FrameKind::Phone).count(), 8);
        assert_eq!(frames.iter().filter(|f| **f == FrameKind::Display).count(), 3);
    }

    #[test]
    fn frame_dimensions() {
        assert_eq!(FrameKind::Screenshot.dimensions(), (1200, 800));
        assert_eq!(FrameKind::Phone.dimensions(), (220, 476));
        assert_eq!(FrameKind::Display.dimensions(), (1080, 608));
    }

    #[test]
    fn duplicate_tech_tags_are_kept() {
        let raw = r#"{"eyebrow":"x","title":"t","summary":"s","tech":["Rust","Rust"]}"#;
        let hero: Hero = serde_json::from_str(raw).unwrap();
        assert_eq!(hero.tech, ["Rust", "Rust"]);
    }

    #[test]
    fn malformed_document_names_itself() {
        let err = parse::<Site>("broken.json", "{").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn asset_url_encodes_segments() {
        assert_eq!(asset_url("/projects/qqsc/Initial Screen.png"), "/projects/qqsc/Initial%20Screen.png");
        assert_eq!(asset_url("/projects/oneshot/ai-setup.png"), "/projects/oneshot/ai-setup.png");
    }

    #[test]
    fn what_i_built_bullets_are_rose_under_an_amber_heading() {
        let study = qqsc().unwrap();
        let card = study
            .sections
            .iter()
            .find_map(|section| match &section.body {
                SectionBody::Details { cards } => cards.iter().find(|card| card.heading == "What I Built"),
                _ => None,
            })
            .unwrap();
        assert_eq!(card.tone, Tone::Amber);
        assert_eq!(card.bullet_tone(), Tone::Rose);
    }

    #[test]
    fn bullet_tone_defaults_to_heading_tone() {
        let raw = r#"{"heading":"Backend","tone":"green","body":{"kind":"list","items":["Axum"]}}"#;
        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.bullet, None);
        assert_eq!(card.bullet_tone(), Tone::Green);
    }
}
