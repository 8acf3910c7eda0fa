use yew::prelude::*;

use crate::content;
use crate::pages::case_study;

#[function_component(OneShot)]
pub fn oneshot() -> Html {
    let content = use_memo(|_| case_study::load(content::oneshot), ());
    case_study::render(&content)
}
