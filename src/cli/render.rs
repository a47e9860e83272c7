//! `render` command: render one link as an `<a>` element.

use anyhow::{Result, bail};
use serde_json::Value;

use super::RenderArgs;
use crate::link::{Classifier, LinkPrimitives, LinkRequest, Props, render_link};

/// Run the render command.
pub fn run_render<P>(args: &RenderArgs, classifier: &Classifier, primitives: &P) -> Result<()>
where
    P: LinkPrimitives<Output = String>,
{
    let request = build_request(args)?;
    println!("{}", render_link(&request, classifier, primitives)?);
    Ok(())
}

/// Build a link request from CLI flags.
pub fn build_request(args: &RenderArgs) -> Result<LinkRequest> {
    let mut props = parse_attrs(&args.attrs)?;
    if let Some(text) = &args.text {
        props.insert("children".into(), Value::from(text.as_str()));
    }
    Ok(LinkRequest {
        to: args.to.clone(),
        href: args.href.clone(),
        props,
    })
}

/// Parse `key=value` pairs; a bare `key` becomes `true`.
fn parse_attrs(attrs: &[String]) -> Result<Props> {
    let mut props = Props::new();
    for attr in attrs {
        let (key, value) = match attr.split_once('=') {
            Some((key, value)) => (key.trim(), Value::from(value)),
            None => (attr.trim(), Value::Bool(true)),
        };
        if key.is_empty() {
            bail!("invalid attribute `{}`: missing name", attr);
        }
        if matches!(key, "to" | "href") {
            bail!("use --{} instead of --attr {}", key, attr);
        }
        props.insert(key.to_string(), value);
    }
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathPrefix, SiteOrigin};
    use crate::link::HtmlPrimitives;
    use serde_json::json;

    fn args(to: Option<&str>, href: Option<&str>, attrs: &[&str], text: Option<&str>) -> RenderArgs {
        RenderArgs {
            to: to.map(str::to_string),
            href: href.map(str::to_string),
            attrs: attrs.iter().map(|s| s.to_string()).collect(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_attrs() {
        let props = parse_attrs(&["class=btn".into(), "hidden".into(), "data-x=a=b".into()])
            .unwrap();
        assert_eq!(props["class"], json!("btn"));
        assert_eq!(props["hidden"], json!(true));
        assert_eq!(props["data-x"], json!("a=b"));
    }

    #[test]
    fn test_parse_attrs_rejects() {
        assert!(parse_attrs(&["=x".into()]).is_err());
        assert!(parse_attrs(&["href=/x".into()]).is_err());
    }

    #[test]
    fn test_build_request() {
        let req = build_request(&args(None, Some("/docs"), &["class=nav"], Some("Docs"))).unwrap();
        assert_eq!(req.url().unwrap(), "/docs");
        assert_eq!(req.props["children"], json!("Docs"));
    }

    #[test]
    fn test_render_end_to_end() {
        let classifier = Classifier::new(SiteOrigin::from_host("example.com"), PathPrefix::new("/blog"));
        let html = HtmlPrimitives::new(PathPrefix::new("/blog"));

        let req = build_request(&args(Some("/blog/post-1"), None, &["class=card"], Some("Post"))).unwrap();
        assert_eq!(
            render_link(&req, &classifier, &html).unwrap(),
            r#"<a href="/blog/post-1" class="card">Post</a>"#
        );

        let req = build_request(&args(Some("https://external.example/page"), None, &[], None)).unwrap();
        assert_eq!(
            render_link(&req, &classifier, &html).unwrap(),
            r#"<a href="https://external.example/page" target="_blank" rel="noopener noreferrer">https://external.example/page</a>"#
        );
    }
}
