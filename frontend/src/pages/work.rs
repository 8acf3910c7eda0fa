use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::head::DocumentHead;
use crate::config;
use crate::content::{self, PageMeta};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectIndexProps {
    pub title: AttrValue,
    pub heading: AttrValue,
    pub message: AttrValue,
    /// Adds a link out to the portfolio's own work list.
    #[prop_or_default]
    pub link_all: bool,
}

/// Headline plus links to every case study.
#[function_component(ProjectIndex)]
pub fn project_index(props: &ProjectIndexProps) -> Html {
    let site = use_memo(|_| content::site(), ());
    let head = match &*site {
        Ok(site) => {
            let meta = PageMeta {
                title: format!("{} | {}", props.title, site.title),
                description: site.description.clone(),
            };
            html! { <DocumentHead meta={meta} site_name={site.name.clone()} /> }
        }
        Err(err) => {
            log::error!("{}", err);
            html! {}
        }
    };

    html! {
        <div id="work" class="project-index">
            { head }
            <h1>{&props.heading}</h1>
            <p>{&props.message}</p>
            <div class="project-index-links">
                <Link<Route> to={Route::OneShot} classes="project-index-link">
                    {"OneShot"}
                </Link<Route>>
                <Link<Route> to={Route::Qqsc} classes="project-index-link">
                    {"Quem Quer Ser Contabilista"}
                </Link<Route>>
                {
                    if props.link_all {
                        html! { <a href={config::work_url()} class="project-index-link">{"All projects"}</a> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .project-index {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        padding: 0 1.5rem;
                        text-align: center;
                        background: #0a0a0f;
                        color: #ffffff;
                        font-family: 'Inter', system-ui, sans-serif;
                    }
                    .project-index h1 {
                        font-size: 2.25rem;
                        margin: 0 0 1rem 0;
                    }
                    .project-index p {
                        color: #a0a0b0;
                        margin: 0 0 2rem 0;
                    }
                    .project-index-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .project-index-link {
                        color: #fb7185;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .project-index-link:hover {
                        color: #fda4af;
                    }
                "#}
            </style>
        </div>
    }
}

/// Landing for `/` when the case studies are served on the portfolio's own origin.
#[function_component(Work)]
pub fn work() -> Html {
    html! {
        <ProjectIndex
            title="Work"
            heading="Selected work"
            message="Case studies of products designed and built end to end."
        />
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    use super::*;

    #[function_component]
    fn RoutedWork() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <Work />
            </Router>
        }
    }

    #[tokio::test]
    async fn work_index_is_the_work_anchor() {
        let rendered = ServerRenderer::<RoutedWork>::new().render().await;
        assert!(rendered.contains(r#"id="work""#));
        assert!(rendered.contains(r#"href="/oneshot""#));
        assert!(rendered.contains(r#"href="/qqsc""#));
        assert!(!rendered.contains("All projects"));
    }
}
