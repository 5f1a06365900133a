//! Links to free external personality tests

use dioxus::prelude::*;

use crate::presentation::state::use_language_state;

struct TestLink {
    key: &'static str,
    fallback: &'static str,
    url: &'static str,
    class: &'static str,
}

const TEST_LINKS: &[TestLink] = &[
    TestLink {
        key: "tests.mbti",
        fallback: "Test my MBTI type",
        url: "https://www.16personalities.com/ch",
        class: "test-link test-link-indigo",
    },
    TestLink {
        key: "tests.functions",
        fallback: "Test my Jungian cognitive functions",
        url: "https://www.jungus.cn/test/",
        class: "test-link test-link-amber",
    },
    TestLink {
        key: "tests.enneagram",
        fallback: "Test my Enneagram type",
        url: "https://enneagram-personality.com/zh-Hans",
        class: "test-link test-link-emerald",
    },
];

#[component]
pub fn PersonalityTestLinks() -> Element {
    let lang = use_language_state();

    rsx! {
        section { class: "test-links",
            h3 {
                {lang.t("tests.heading", "Not sure about your personality type? Take a free test:")}
            }
            div { class: "test-link-row",
                for link in TEST_LINKS {
                    a {
                        key: "{link.url}",
                        class: link.class,
                        href: link.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { {lang.t(link.key, link.fallback)} }
                        span { class: "external-icon", "↗" }
                    }
                }
            }
        }
    }
}
