use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub label: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span class="section-label">{&props.label}</span>
            <h2 class="section-title">{&props.title}</h2>
            <p class="section-subtitle">{&props.subtitle}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FlowTitleProps {
    pub children: Children,
}

/// Short heading between two fading rules, introducing one flow.
#[function_component(FlowTitle)]
pub fn flow_title(props: &FlowTitleProps) -> Html {
    html! {
        <h3 class="flow-title">
            <span class="flow-rule left"></span>
            { for props.children.iter() }
            <span class="flow-rule right"></span>
        </h3>
    }
}
