//! Rendering adapter: maps a [`LinkTarget`] onto one of two primitives.
//!
//! | Target                           | Primitive  | Attributes              |
//! |----------------------------------|------------|-------------------------|
//! | `Plain { force_blank: false }`   | `plain`    | props as-is             |
//! | `Plain { force_blank: true }`    | `plain`    | props + `target`/`rel`  |
//! | `Internal`                       | `internal` | props as-is             |

use serde_json::Value;

use super::{Classifier, LinkError, LinkRequest, LinkTarget, Props};
use crate::core::PathPrefix;
use crate::debug;
use crate::utils::html::{escape, escape_attr, is_valid_attr_name};

/// `target` forced on links that open in a new tab.
pub const BLANK_TARGET: &str = "_blank";

/// `rel` forced on links that open in a new tab.
pub const BLANK_REL: &str = "noopener noreferrer";

/// Attribute marking links handled by client-side navigation.
pub const NAV_ATTR: &str = "data-tola-nav";

/// Prop rendered as element text instead of an attribute.
const CHILDREN_PROP: &str = "children";

/// The two link-rendering primitives a host provides.
pub trait LinkPrimitives {
    type Output;

    /// Standard hyperlink.
    fn plain(&self, href: &str, attrs: &Props) -> Self::Output;

    /// Client-side route link. Adds the site path prefix itself.
    fn internal(&self, path: &str, attrs: &Props) -> Self::Output;
}

/// Resolve, classify and render a link through exactly one primitive.
pub fn render_link<P: LinkPrimitives>(
    request: &LinkRequest,
    classifier: &Classifier,
    primitives: &P,
) -> Result<P::Output, LinkError> {
    let output = match classifier.resolve(request)? {
        LinkTarget::Plain {
            href,
            force_blank: false,
        } => primitives.plain(&href, &request.props),
        LinkTarget::Plain {
            href,
            force_blank: true,
        } => primitives.plain(&href, &with_blank_target(&request.props)),
        LinkTarget::Internal { path } => primitives.internal(&path, &request.props),
    };
    Ok(output)
}

/// Copy `props` with `target` and `rel` overridden.
fn with_blank_target(props: &Props) -> Props {
    let mut attrs = props.clone();
    attrs.insert("target".into(), Value::from(BLANK_TARGET));
    attrs.insert("rel".into(), Value::from(BLANK_REL));
    attrs
}

// =============================================================================
// HTML primitives
// =============================================================================

/// Renders both primitives as `<a>` element strings.
#[derive(Debug, Clone, Default)]
pub struct HtmlPrimitives {
    prefix: PathPrefix,
    nav: bool,
}

impl HtmlPrimitives {
    pub fn new(prefix: PathPrefix) -> Self {
        Self { prefix, nav: false }
    }

    /// Mark internal links for client-side navigation.
    pub fn with_nav(mut self, nav: bool) -> Self {
        self.nav = nav;
        self
    }

    fn anchor(&self, href: &str, attrs: &Props, nav: bool) -> String {
        let mut html = String::with_capacity(64);
        html.push_str("<a href=\"");
        html.push_str(&escape_attr(href));
        html.push('"');

        for (name, value) in attrs {
            if name == CHILDREN_PROP {
                continue;
            }
            if name == "href" || !is_valid_attr_name(name) {
                debug!("link"; "skipping attribute `{}` on {}", name, href);
                continue;
            }
            push_attr(&mut html, name, value);
        }

        if nav {
            html.push(' ');
            html.push_str(NAV_ATTR);
        }

        html.push('>');
        match attrs.get(CHILDREN_PROP) {
            Some(Value::String(text)) => html.push_str(&escape(text)),
            Some(other) => html.push_str(&escape(&attr_text(other).unwrap_or_default())),
            None => html.push_str(&escape(href)),
        }
        html.push_str("</a>");
        html
    }
}

impl LinkPrimitives for HtmlPrimitives {
    type Output = String;

    fn plain(&self, href: &str, attrs: &Props) -> String {
        self.anchor(href, attrs, false)
    }

    fn internal(&self, path: &str, attrs: &Props) -> String {
        self.anchor(&self.prefix.join(path), attrs, self.nav)
    }
}

/// Append ` name="value"` (or bare ` name` for `true`).
fn push_attr(html: &mut String, name: &str, value: &Value) {
    if value == &Value::Bool(true) {
        html.push(' ');
        html.push_str(name);
        return;
    }
    let Some(text) = attr_text(value) else {
        return;
    };
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(&text));
    html.push('"');
}

/// Attribute text for a JSON value. `None` means omit the attribute.
fn attr_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.iter().all(Value::is_string) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SiteOrigin;
    use serde_json::json;

    /// Records which primitive was called and with what.
    #[derive(Default)]
    struct Recorder;

    #[derive(Debug, PartialEq)]
    enum Call {
        Plain(String, Props),
        Internal(String, Props),
    }

    impl LinkPrimitives for Recorder {
        type Output = Call;

        fn plain(&self, href: &str, attrs: &Props) -> Call {
            Call::Plain(href.to_string(), attrs.clone())
        }

        fn internal(&self, path: &str, attrs: &Props) -> Call {
            Call::Internal(path.to_string(), attrs.clone())
        }
    }

    fn classifier(prefix: &str) -> Classifier {
        Classifier::new(SiteOrigin::from_host("example.com"), PathPrefix::new(prefix))
    }

    fn props(value: serde_json::Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => panic!("props must be an object"),
        }
    }

    #[test]
    fn test_section_keeps_props() {
        let req = LinkRequest::to("#contact")
            .with_prop("class", "toc")
            .with_prop("target", "_self");
        let call = render_link(&req, &classifier(""), &Recorder).unwrap();
        assert_eq!(
            call,
            Call::Plain(
                "#contact".into(),
                props(json!({"class": "toc", "target": "_self"}))
            )
        );
    }

    #[test]
    fn test_mailto_forces_blank() {
        let req = LinkRequest::to("mailto:a@b.com");
        let call = render_link(&req, &classifier(""), &Recorder).unwrap();
        assert_eq!(
            call,
            Call::Plain(
                "mailto:a@b.com".into(),
                props(json!({"target": "_blank", "rel": "noopener noreferrer"}))
            )
        );
    }

    #[test]
    fn test_blank_overrides_caller_target_and_rel() {
        let req = LinkRequest::to("https://external.example/page")
            .with_prop("target", "_self")
            .with_prop("rel", "me")
            .with_prop("class", "ext");
        let Call::Plain(href, attrs) = render_link(&req, &classifier(""), &Recorder).unwrap()
        else {
            panic!("expected plain link");
        };
        assert_eq!(href, "https://external.example/page");
        assert_eq!(attrs["target"], json!("_blank"));
        assert_eq!(attrs["rel"], json!("noopener noreferrer"));
        assert_eq!(attrs["class"], json!("ext"));
    }

    #[test]
    fn test_image_forces_blank() {
        let req = LinkRequest::to("/about.png");
        let call = render_link(&req, &classifier(""), &Recorder).unwrap();
        assert!(matches!(call, Call::Plain(ref href, ref attrs)
            if href == "/about.png" && attrs["target"] == json!("_blank")));
    }

    #[test]
    fn test_internal_route() {
        let req = LinkRequest::to("/blog/post-1").with_prop("class", "card");
        let call = render_link(&req, &classifier("/blog"), &Recorder).unwrap();
        assert_eq!(
            call,
            Call::Internal("/post-1".into(), props(json!({"class": "card"})))
        );

        let req = LinkRequest::href("/docs");
        let call = render_link(&req, &classifier(""), &Recorder).unwrap();
        assert_eq!(call, Call::Internal("/docs".into(), Props::new()));
    }

    #[test]
    fn test_missing_url_fails() {
        let req = LinkRequest::default().with_prop("class", "x");
        assert!(matches!(
            render_link(&req, &classifier(""), &Recorder),
            Err(LinkError::MissingUrl)
        ));
    }

    #[test]
    fn test_html_plain() {
        let html = HtmlPrimitives::default();
        let req = LinkRequest::to("mailto:a@b.com").with_prop("children", "Mail me");
        assert_eq!(
            render_link(&req, &classifier(""), &html).unwrap(),
            r#"<a href="mailto:a@b.com" target="_blank" rel="noopener noreferrer">Mail me</a>"#
        );
    }

    #[test]
    fn test_html_internal_readds_prefix() {
        let html = HtmlPrimitives::new(PathPrefix::new("/blog")).with_nav(true);
        let req = LinkRequest::to("/blog/post-1").with_prop("children", "Post");
        assert_eq!(
            render_link(&req, &classifier("/blog"), &html).unwrap(),
            r#"<a href="/blog/post-1" data-tola-nav>Post</a>"#
        );
    }

    #[test]
    fn test_html_internal_same_host_url_keeps_prefix() {
        let html = HtmlPrimitives::new(PathPrefix::new("/blog"));
        let req = LinkRequest::to("https://example.com/blog/post-1").with_prop("children", "Post");
        assert_eq!(
            render_link(&req, &classifier("/blog"), &html).unwrap(),
            r#"<a href="https://example.com/blog/post-1">Post</a>"#
        );
    }

    #[test]
    fn test_html_text_defaults_to_href() {
        let html = HtmlPrimitives::default();
        assert_eq!(
            render_link(&LinkRequest::to("#top"), &classifier(""), &html).unwrap(),
            r##"<a href="#top">#top</a>"##
        );
    }

    #[test]
    fn test_html_attribute_values() {
        let html = HtmlPrimitives::default();
        let attrs = props(json!({
            "class": ["btn", "primary"],
            "hidden": true,
            "draggable": false,
            "title": null,
            "tabindex": 0,
            "aria-label": "say \"hi\"",
            "bad name": "x",
            "href": "/ignored",
            "children": "<b>"
        }));
        assert_eq!(
            html.plain("/a", &attrs),
            r#"<a href="/a" class="btn primary" hidden tabindex="0" aria-label="say &quot;hi&quot;">&lt;b&gt;</a>"#
        );
    }
}
