use yew::prelude::*;

use crate::components::navigation::BackArrow;
use crate::config;
use crate::content::Footer;

#[derive(Properties, PartialEq)]
pub struct CaseStudyFooterProps {
    pub footer: Footer,
}

#[function_component(CaseStudyFooter)]
pub fn case_study_footer(props: &CaseStudyFooterProps) -> Html {
    let footer = &props.footer;
    html! {
        <footer class="footer-cta">
            <div class="footer-content">
                {
                    if let Some(cta) = &footer.cta {
                        html! {
                            <a href={cta.href.clone()} target="_blank" rel="noopener noreferrer" class="external-cta">
                                {&cta.label}
                                <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
                                </svg>
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
                <p class="credit">{&footer.credit}</p>
                <a href={config::work_url()} class="more-projects">
                    <BackArrow />
                    {"View more projects"}
                </a>
            </div>
        </footer>
    }
}
