//! Link requests, classification targets and rendering.
//!
//! ```text
//! LinkRequest ──url()──► &str ──Classifier::target()──► LinkTarget
//!                                                          │
//!                                  render_link() ◄─────────┘
//!                                       │
//!                         LinkPrimitives::{plain, internal}
//! ```
//!
//! # Classification
//!
//! | Rule | Example | Target |
//! |------|---------|--------|
//! | Section anchor | `#contact` | `Plain`, no overrides |
//! | External / mailto / image | `https://...`, `mailto:`, `/a.png` | `Plain`, `target="_blank"` |
//! | Internal route | `/blog/post-1` | `Internal`, prefix stripped |

mod error;
mod render;
mod request;
mod target;

pub use error::LinkError;
pub use render::{HtmlPrimitives, LinkPrimitives, render_link};
pub use request::{LinkRequest, Props};
pub use target::{Classifier, LinkTarget};
