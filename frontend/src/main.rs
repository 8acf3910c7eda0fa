use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod components {
    pub mod footer;
    pub mod frames;
    pub mod head;
    pub mod navigation;
    pub mod section_header;
}
mod pages {
    pub mod case_study;
    pub mod not_found;
    pub mod oneshot;
    pub mod qqsc;
    pub mod work;
}

use pages::{
    not_found::NotFound,
    oneshot::OneShot,
    qqsc::Qqsc,
    work::Work,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/oneshot")]
    OneShot,
    #[at("/qqsc")]
    Qqsc,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::OneShot => {
            info!("Rendering OneShot page");
            html! { <OneShot /> }
        },
        Route::Qqsc => {
            info!("Rendering QQSC page");
            html! { <Qqsc /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_links_resolve_to_routes() {
        // Same-origin release builds link back into this router
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert!(config::work_url().ends_with("/#work"));
        assert!(config::home_url().ends_with('/'));
    }

    #[test]
    fn case_study_paths() {
        assert_eq!(Route::recognize("/oneshot"), Some(Route::OneShot));
        assert_eq!(Route::recognize("/qqsc"), Some(Route::Qqsc));
        assert_eq!(Route::OneShot.to_path(), "/oneshot");
    }
}
