//! SVG rendered into the DOM instead of through `<img>`, so the
//! `foreignObject` conic gradients in the reflection layers actually paint.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::VinylError;

#[cfg(target_arch = "wasm32")]
type Host = web_sys::Element;
#[cfg(not(target_arch = "wasm32"))]
type Host = ();

#[cfg(target_arch = "wasm32")]
fn host_from(event: &MountedEvent) -> Option<Host> {
    event.data().downcast::<web_sys::Element>().cloned()
}

#[cfg(not(target_arch = "wasm32"))]
fn host_from(_event: &MountedEvent) -> Option<Host> {
    None
}

#[component]
pub fn InlineSvg(src: String, #[props(default)] class: String) -> Element {
    let mut host = use_signal(|| None::<Host>);
    let in_flight = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    // A newer src or an unmount cancels the fetch, so a stale response never
    // lands in the host.
    use_effect(use_reactive((&src,), move |(src,)| {
        if let Some(task) = in_flight.take() {
            task.cancel();
        }
        let Some(target) = host() else {
            return;
        };
        if src.is_empty() {
            return;
        }
        let task = spawn(async move {
            if let Err(err) = load_into(&target, &src).await {
                warn!("inline svg not rendered: {err}");
            }
        });
        in_flight.set(Some(task));
    }));

    rsx! {
        div {
            class: "{class}",
            onmounted: move |event| host.set(host_from(&event)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_into(host: &Host, url: &str) -> Result<(), VinylError> {
    let svg = fetch_svg(url).await?;
    let parse_error = || VinylError::SvgParse {
        url: url.to_string(),
    };
    let document = host.owner_document().ok_or_else(parse_error)?;
    let node = document
        .import_node_with_deep(&svg, true)
        .map_err(|_| parse_error())?;
    host.set_inner_html("");
    host.append_child(&node).map_err(|_| parse_error())?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_into(_host: &Host, _url: &str) -> Result<(), crate::error::VinylError> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_svg(url: &str) -> Result<web_sys::Element, VinylError> {
    let fetch_error = |reason: String| VinylError::Fetch {
        url: url.to_string(),
        reason,
    };
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;
    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }
    let text = response
        .text()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    let parse_error = || VinylError::SvgParse {
        url: url.to_string(),
    };
    let parsed = web_sys::DomParser::new()
        .and_then(|parser| parser.parse_from_string(&text, web_sys::SupportedType::ImageSvgXml))
        .map_err(|_| parse_error())?;
    let root = parsed.document_element().ok_or_else(parse_error)?;
    // DOMParser reports malformed input as a document rooted at <parsererror>.
    if root.tag_name().eq_ignore_ascii_case("parsererror") {
        return Err(parse_error());
    }
    Ok(root)
}
