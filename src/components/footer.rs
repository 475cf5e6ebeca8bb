use crate::layout::LayoutState;
use dioxus::prelude::*;

const CREDIT: (&str, &str) = ("Project by Ashita Jain", "https://ashitajain.framer.website/#hero");

const LINKS: [(&str, &str); 4] = [
    ("email", "mailto:ashikhushi2@gmail.com"),
    ("linkedin", "https://www.linkedin.com/in/ashitajain29/"),
    ("instagram", "https://www.instagram.com/chiaroscuro.o/"),
    ("twitter", "https://x.com/okayashita"),
];

/// Credits bar pinned to the bottom of the viewport, outside the scaled canvas.
#[component]
pub fn Footer(layout: LayoutState) -> Element {
    let footer = layout.footer();
    let style = format!(
        "padding: {}; font-size: {}px; flex-direction: {}; justify-content: {}; gap: {}px;",
        footer.padding, footer.font_size, footer.direction, footer.justify, footer.gap,
    );
    let links_style = format!("gap: {}px;", footer.link_gap);
    let (credit, credit_href) = CREDIT;

    rsx! {
        footer { class: "site-footer", style: "{style}",
            a {
                class: "footer-link",
                href: credit_href,
                target: "_blank",
                rel: "noopener noreferrer",
                "{credit}"
            }
            div { class: "footer-links", style: "{links_style}",
                for (label, href) in LINKS {
                    a {
                        key: "{label}",
                        class: "footer-link",
                        href,
                        target: if !href.starts_with("mailto:") { "_blank" },
                        rel: if !href.starts_with("mailto:") { "noopener noreferrer" },
                        "{label}"
                    }
                }
            }
        }
    }
}
