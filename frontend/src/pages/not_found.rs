use yew::prelude::*;

use crate::pages::work::ProjectIndex;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <ProjectIndex
            title="Not found"
            heading="Page not found"
            message="That page does not exist. Try one of the case studies instead."
            link_all={true}
        />
    }
}
