use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::content::PageMeta;

#[derive(Properties, PartialEq)]
pub struct DocumentHeadProps {
    pub meta: PageMeta,
    pub site_name: AttrValue,
}

/// Writes the page title and link-preview tags into `<head>` on mount.
#[function_component(DocumentHead)]
pub fn document_head(props: &DocumentHeadProps) -> Html {
    {
        let meta = props.meta.clone();
        let site_name = props.site_name.clone();
        use_effect_with_deps(
            move |deps: &(PageMeta, AttrValue)| {
                let (meta, site_name) = deps;
                match apply(meta, site_name) {
                    Ok(()) => debug!("document head set for {}", meta.title),
                    Err(err) => warn!("failed to update document head: {:?}", err),
                }
                || ()
            },
            (meta, site_name),
        );
    }

    html! {}
}

fn apply(meta: &PageMeta, site_name: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    document.set_title(&meta.title);
    upsert_meta(&document, "name", "description", &meta.description)?;
    upsert_meta(&document, "property", "og:title", &meta.title)?;
    upsert_meta(&document, "property", "og:description", &meta.description)?;
    upsert_meta(&document, "property", "og:site_name", site_name)?;
    upsert_meta(&document, "property", "og:type", "website")?;
    Ok(())
}

fn upsert_meta(document: &Document, attr: &str, key: &str, content: &str) -> Result<(), JsValue> {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let element: Element = match document.query_selector(&selector)? {
        Some(element) => element,
        None => {
            let element = document.create_element("meta")?;
            element.set_attribute(attr, key)?;
            let head = document.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
            head.append_child(&element)?;
            element
        }
    };
    element.set_attribute("content", content)
}
