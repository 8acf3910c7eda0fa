use yew::prelude::*;

use crate::content;
use crate::pages::case_study;

/// "Quem Quer Ser Contabilista", the congress quiz game.
#[function_component(Qqsc)]
pub fn qqsc() -> Html {
    let content = use_memo(|_| case_study::load(content::qqsc), ());
    case_study::render(&content)
}
