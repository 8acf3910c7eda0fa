use yew::prelude::*;

use crate::content::{asset_url, ContentEntry, FrameKind};

#[derive(Properties, PartialEq)]
pub struct FrameProps {
    pub entry: ContentEntry,
}

#[derive(Properties, PartialEq)]
struct ImageProps {
    entry: ContentEntry,
    kind: FrameKind,
}

// Width and height let the browser reserve the box before the asset arrives.
#[function_component(FramedImage)]
fn framed_image(props: &ImageProps) -> Html {
    let (width, height) = props.kind.dimensions();
    html! {
        <img
            src={asset_url(&props.entry.src)}
            alt={props.entry.label.clone()}
            width={width.to_string()}
            height={height.to_string()}
            loading="lazy"
            class="frame-image"
        />
    }
}

#[derive(Properties, PartialEq)]
struct CaptionProps {
    entry: ContentEntry,
}

#[function_component(Caption)]
fn caption(props: &CaptionProps) -> Html {
    html! {
        <>
            <p class="frame-label">{&props.entry.label}</p>
            <p class="frame-sublabel">{&props.entry.sublabel}</p>
        </>
    }
}

/// Flat rounded card, used for desktop web screenshots.
#[function_component(Screenshot)]
pub fn screenshot(props: &FrameProps) -> Html {
    html! {
        <div class="frame screenshot-frame">
            <div class="frame-lift">
                <div class="screenshot-card">
                    <FramedImage entry={props.entry.clone()} kind={FrameKind::Screenshot} />
                </div>
            </div>
            <Caption entry={props.entry.clone()} />
        </div>
    }
}

#[function_component(PhoneFrame)]
pub fn phone_frame(props: &FrameProps) -> Html {
    html! {
        <div class="frame phone-frame">
            <div class="frame-lift">
                <div class="phone-bezel">
                    <div class="phone-notch"></div>
                    <div class="phone-screen">
                        <FramedImage entry={props.entry.clone()} kind={FrameKind::Phone} />
                    </div>
                </div>
            </div>
            <Caption entry={props.entry.clone()} />
        </div>
    }
}

#[function_component(DisplayFrame)]
pub fn display_frame(props: &FrameProps) -> Html {
    html! {
        <div class="frame display-frame">
            <div class="frame-lift">
                <div class="display-bezel">
                    <div class="display-screen">
                        <FramedImage entry={props.entry.clone()} kind={FrameKind::Display} />
                    </div>
                </div>
                <div class="display-stand"></div>
            </div>
            <Caption entry={props.entry.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FrameListProps {
    pub kind: FrameKind,
    pub entries: Vec<ContentEntry>,
}

/// Renders entries in declaration order inside the variant `kind` selects.
#[function_component(FrameList)]
pub fn frame_list(props: &FrameListProps) -> Html {
    let frames = props.entries.iter().map(|entry| {
        let entry = entry.clone();
        match props.kind {
            FrameKind::Screenshot => html! { <Screenshot entry={entry} /> },
            FrameKind::Phone => html! { <PhoneFrame entry={entry} /> },
            FrameKind::Display => html! { <DisplayFrame entry={entry} /> },
        }
    });

    let class = match props.kind {
        FrameKind::Screenshot => "frame-list single",
        FrameKind::Phone => "frame-list row",
        FrameKind::Display => "frame-list stack",
    };

    html! {
        <div class={class}>
            { for frames }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn entry(label: &str, sublabel: &str, src: &str) -> ContentEntry {
        ContentEntry {
            src: src.to_string(),
            label: label.to_string(),
            sublabel: sublabel.to_string(),
        }
    }

    #[tokio::test]
    async fn phone_frame_declares_asset_size() {
        let rendered = ServerRenderer::<PhoneFrame>::with_props(|| FrameProps {
            entry: entry("Leaderboard", "Final rankings", "/projects/qqsc/Score Board.png"),
        })
        .render()
        .await;

        assert!(rendered.contains(r#"width="220""#), "{}", rendered);
        assert!(rendered.contains(r#"height="476""#), "{}", rendered);
        assert!(rendered.contains("/projects/qqsc/Score%20Board.png"));
        assert!(rendered.contains("phone-notch"));
    }

    #[tokio::test]
    async fn display_frame_has_stand() {
        let rendered = ServerRenderer::<DisplayFrame>::with_props(|| FrameProps {
            entry: entry("Game Starting", "Waiting for players to join", "/projects/qqsc/start.png"),
        })
        .render()
        .await;

        assert!(rendered.contains(r#"width="1080""#));
        assert!(rendered.contains(r#"height="608""#));
        assert!(rendered.contains("display-stand"));
        assert!(rendered.contains("Waiting for players to join"));
    }

    #[tokio::test]
    async fn list_keeps_entry_order() {
        let rendered = ServerRenderer::<FrameList>::with_props(|| FrameListProps {
            kind: FrameKind::Screenshot,
            entries: vec![
                entry("First", "one", "/a.png"),
                entry("Second", "two", "/b.png"),
                entry("Third", "three", "/c.png"),
            ],
        })
        .render()
        .await;

        let first = rendered.find("/a.png").unwrap();
        let second = rendered.find("/b.png").unwrap();
        let third = rendered.find("/c.png").unwrap();
        assert!(first < second && second < third);
        assert_eq!(rendered.matches(r#"width="1200""#).count(), 3);
    }
}
