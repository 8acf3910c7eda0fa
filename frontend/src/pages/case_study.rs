use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::footer::CaseStudyFooter;
use crate::components::frames::FrameList;
use crate::components::head::DocumentHead;
use crate::components::navigation::Navigation;
use crate::components::section_header::{FlowTitle, SectionHeader};
use crate::content::{self, Card, CardBody, CaseStudy, ContentError, Flow, Hero, Section, SectionBody, Site, Tone};

/// Everything one case-study page needs, decoded once per mount.
pub struct PageContent {
    pub site: Rc<Site>,
    pub study: Rc<CaseStudy>,
}

pub fn load(study: fn() -> Result<CaseStudy, ContentError>) -> Result<PageContent, ContentError> {
    Ok(PageContent {
        site: Rc::new(content::site()?),
        study: Rc::new(study()?),
    })
}

pub fn render(content: &Result<PageContent, ContentError>) -> Html {
    match content {
        Ok(content) => html! {
            <CaseStudyPage site={content.site.clone()} study={content.study.clone()} />
        },
        Err(err) => {
            error!("{}", err);
            html! {
                <div class="content-unavailable">
                    <p>{"This case study could not be loaded."}</p>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyPageProps {
    pub site: Rc<Site>,
    pub study: Rc<CaseStudy>,
}

#[function_component(CaseStudyPage)]
pub fn case_study_page(props: &CaseStudyPageProps) -> Html {
    let CaseStudyPageProps { site, study } = props;
    let page_style = format!(
        "--accent: {}; --glow: {};",
        study.theme.accent.hex(),
        study.theme.glow.hex()
    );

    html! {
        <div class="case-study" id={study.slug.clone()} style={page_style}>
            <DocumentHead meta={study.meta.clone()} site_name={site.name.clone()} />
            <div class="noise-overlay"></div>
            <div class="grid-bg">
                <Navigation brand={site.brand.clone()} />
                { hero(&study.hero) }
                { for study.sections.iter().map(section) }
                <CaseStudyFooter footer={study.footer.clone()} />
            </div>
            <style>{STYLES}</style>
        </div>
    }
}

fn hero(hero: &Hero) -> Html {
    html! {
        <header class="hero">
            <div class="hero-glow left"></div>
            <div class="hero-glow right"></div>
            <p class="hero-eyebrow fade-in">{&hero.eyebrow}</p>
            <h1 class="hero-title fade-in delay-1">{&hero.title}</h1>
            <p class="hero-summary fade-in delay-2">{&hero.summary}</p>
            <div class="tech-badges fade-in delay-3">
                { for hero.tech.iter().map(|tech| html! { <span class="tech-badge">{tech}</span> }) }
            </div>
            <div class="scroll-hint fade-in delay-4">
                <span>{"Scroll to explore"}</span>
                <div class="scroll-line"></div>
            </div>
        </header>
    }
}

fn section(section: &Section) -> Html {
    let body = match &section.body {
        SectionBody::Flows { flows } => html! {
            <div class="flows">
                { for flows.iter().map(flow) }
            </div>
        },
        SectionBody::Gallery { frame, entries } => html! {
            <FrameList kind={*frame} entries={entries.clone()} />
        },
        SectionBody::Details { cards } => html! {
            <div class="details-grid">
                { for cards.iter().map(card) }
            </div>
        },
    };

    html! {
        <section class={classes!("case-section", section.tinted.then(|| "tinted"))}>
            <div class={section.width.class()}>
                <SectionHeader
                    label={section.label.clone()}
                    title={section.title.clone()}
                    subtitle={section.subtitle.clone()}
                />
                { body }
            </div>
        </section>
    }
}

fn flow(flow: &Flow) -> Html {
    html! {
        <div class="flow">
            <FlowTitle>{&flow.title}</FlowTitle>
            {
                if let Some(description) = &flow.description {
                    html! { <p class="flow-description">{description}</p> }
                } else {
                    html! {}
                }
            }
            <FrameList kind={flow.frame} entries={flow.entries.clone()} />
        </div>
    }
}

fn bullet(tone: Tone) -> Html {
    html! { <span class="bullet" style={format!("background: {};", tone.hex())}></span> }
}

fn card(card: &Card) -> Html {
    let body = match &card.body {
        CardBody::Text { text } => html! { <p class="card-text">{text}</p> },
        CardBody::List { items } => html! {
            <ul class={classes!("card-list", card.wide.then(|| "columns"))}>
                { for items.iter().map(|item| html! { <li>{ bullet(card.bullet_tone()) }{item}</li> }) }
            </ul>
        },
        CardBody::Pairs { pairs } => html! {
            <div class="pairs-grid">
                {
                    for pairs.iter().map(|pair| html! {
                        <div>
                            <p class="challenge">{&pair.challenge}</p>
                            <p class="solution">{&pair.solution}</p>
                        </div>
                    })
                }
            </div>
        },
    };

    html! {
        <div class={classes!("glass-card", card.wide.then(|| "wide"))}>
            <h3 class="card-heading" style={format!("color: {};", card.tone.hex())}>{&card.heading}</h3>
            { body }
        </div>
    }
}

const STYLES: &str = r#"
.case-study {
    --font-mono: 'JetBrains Mono', ui-monospace, monospace;
    overflow-x: hidden;
    background: #0a0a0f;
    color: #ffffff;
    font-family: 'Inter', system-ui, sans-serif;
}

.noise-overlay {
    position: fixed;
    inset: 0;
    pointer-events: none;
    opacity: 0.03;
    z-index: 100;
    background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='200' height='200'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
}

.grid-bg {
    position: relative;
    min-height: 100vh;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.02) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.02) 1px, transparent 1px);
    background-size: 64px 64px;
}

.icon {
    width: 1rem;
    height: 1rem;
}

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 6rem 1.5rem 4rem;
    text-align: center;
    overflow: hidden;
}

.hero-glow {
    position: absolute;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    filter: blur(120px);
    opacity: 0.1;
}

.hero-glow.left {
    top: 25%;
    left: 0;
    transform: translateX(-50%);
    background: var(--glow);
}

.hero-glow.right {
    bottom: 25%;
    right: 0;
    transform: translateX(50%);
    background: #fb7185;
}

.hero-eyebrow {
    font-family: var(--font-mono);
    font-size: 0.875rem;
    letter-spacing: 0.05em;
    color: var(--accent);
    margin: 0 0 1rem 0;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1.5rem 0;
}

.hero-summary {
    font-size: 1.25rem;
    color: #a0a0b0;
    max-width: 42rem;
    margin: 0 0 2rem 0;
}

.tech-badges {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
    margin-bottom: 3rem;
}

.tech-badge {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    color: #a0a0b0;
    padding: 0.375rem 0.875rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.03);
}

.scroll-hint {
    position: absolute;
    bottom: 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #606070;
}

.scroll-line {
    width: 1px;
    height: 2.5rem;
    background: linear-gradient(to bottom, var(--accent), transparent);
    animation: pulse 2s ease-in-out infinite;
}

.fade-in {
    opacity: 0;
    animation: fadeIn 0.8s ease-out forwards;
}
.delay-1 { animation-delay: 0.1s; }
.delay-2 { animation-delay: 0.2s; }
.delay-3 { animation-delay: 0.3s; }
.delay-4 { animation-delay: 0.4s; }

@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

.case-section {
    padding: 6rem 1.5rem;
}

.case-section.tinted {
    background: #0d0d14;
}

.container-narrow,
.container-regular,
.container-wide {
    margin: 0 auto;
}
.container-narrow { max-width: 56rem; }
.container-regular { max-width: 64rem; }
.container-wide { max-width: 72rem; }

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-label {
    display: inline-block;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--accent);
    padding: 0.5rem 1rem;
    border: 1px solid color-mix(in srgb, var(--accent) 30%, transparent);
    border-radius: 9999px;
    margin-bottom: 1.5rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 1rem 0;
}

.section-subtitle {
    font-size: 1.125rem;
    color: #a0a0b0;
    max-width: 36rem;
    margin: 0 auto;
}

.flow {
    margin-bottom: 5rem;
}

.flow:last-child {
    margin-bottom: 0;
}

.flow-title {
    font-size: 1.25rem;
    font-weight: 500;
    color: var(--accent);
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    margin: 0 0 1.5rem 0;
}

.flow-rule {
    width: 4rem;
    height: 1px;
}

.flow-rule.left {
    background: linear-gradient(to right, transparent, color-mix(in srgb, var(--accent) 50%, transparent));
}

.flow-rule.right {
    background: linear-gradient(to left, transparent, color-mix(in srgb, var(--accent) 50%, transparent));
}

.flow-description {
    text-align: center;
    color: #a0a0b0;
    max-width: 42rem;
    margin: 0 auto 2rem;
}

.frame-list.row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
}

.frame-list.stack {
    display: flex;
    flex-direction: column;
    gap: 4rem;
}

.frame-lift {
    transition: transform 0.5s ease-out;
}

.frame:hover .frame-lift {
    transform: scale(1.01);
}

.phone-frame:hover .frame-lift {
    transform: translateY(-0.75rem) scale(1.02);
}

.frame-image {
    display: block;
    width: 100%;
    height: auto;
}

.screenshot-card {
    border-radius: 0.75rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.phone-frame {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.phone-bezel {
    position: relative;
    background: linear-gradient(to bottom right, #1a1a1a, #2d2d2d);
    border-radius: 40px;
    padding: 0.75rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
}

.phone-notch {
    position: absolute;
    top: 0.5rem;
    left: 50%;
    transform: translateX(-50%);
    width: 5rem;
    height: 1.5rem;
    background: #000000;
    border-radius: 9999px;
    z-index: 10;
}

.phone-screen {
    position: relative;
    width: 220px;
    border-radius: 32px;
    overflow: hidden;
    background: #153d4a;
}

.display-bezel {
    background: linear-gradient(to bottom right, #1a1a1a, #0a0a0a);
    border-radius: 1rem;
    padding: 1rem 1rem 2.5rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.display-screen {
    border-radius: 0.5rem;
    overflow: hidden;
    background: #153d4a;
}

.display-stand {
    width: 7rem;
    height: 3.5rem;
    margin: -1.25rem auto 0;
    background: linear-gradient(to bottom, #1a1a1a, #0d0d0d);
    clip-path: polygon(20% 0%, 80% 0%, 100% 100%, 0% 100%);
}

.frame-label {
    margin: 1.5rem 0 0 0;
    text-align: center;
    font-weight: 500;
    color: var(--accent);
}

.phone-frame .frame-label {
    margin-top: 1rem;
    font-size: 0.875rem;
}

.frame-sublabel {
    margin: 0;
    text-align: center;
    font-size: 0.875rem;
    color: #606070;
}

.phone-frame .frame-sublabel {
    font-size: 0.75rem;
}

.details-grid {
    display: grid;
    gap: 2rem;
}

.glass-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 1rem;
    padding: 2rem;
    backdrop-filter: blur(12px);
}

.card-heading {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin: 0 0 1rem 0;
}

.card-text {
    color: #a0a0b0;
    line-height: 1.625;
    margin: 0;
}

.card-list {
    list-style: none;
    padding: 0;
    margin: 0;
    display: grid;
    gap: 0.75rem;
}

.card-list li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: #a0a0b0;
}

.bullet {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 9999px;
    margin-top: 0.5rem;
    flex-shrink: 0;
}

.pairs-grid {
    display: grid;
    gap: 1.5rem;
}

.challenge {
    font-size: 0.875rem;
    font-weight: 500;
    margin: 0 0 0.25rem 0;
}

.solution {
    font-size: 0.875rem;
    color: #a0a0b0;
    margin: 0;
}

.footer-cta {
    padding: 3rem 0;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.footer-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    text-align: center;
}

.external-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem 1.5rem;
    margin-bottom: 1.5rem;
    background: var(--accent);
    color: #0a0a0f;
    font-weight: 600;
    border-radius: 0.5rem;
    text-decoration: none;
    transition: opacity 0.2s ease;
}

.external-cta:hover {
    opacity: 0.9;
}

.credit {
    font-size: 0.875rem;
    color: #606070;
    margin: 0 0 1.5rem 0;
}

.more-projects {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: #fb7185;
    text-decoration: none;
    transition: color 0.2s ease;
}

.more-projects:hover {
    color: #fda4af;
}

@media (min-width: 768px) {
    .hero-title {
        font-size: 3.75rem;
    }

    .section-title {
        font-size: 3rem;
    }

    .details-grid,
    .pairs-grid,
    .card-list.columns {
        grid-template-columns: repeat(2, 1fr);
    }

    .glass-card.wide {
        grid-column: span 2;
    }
}
"#;
