// Preview Renderer: (document, theme) → view tree → styled HTML.
// Nothing in this module mutates the document.

pub mod dates;
pub mod grouping;
pub mod handlers;
pub mod html;
pub mod view;

pub use html::{render_html, RenderedSurface};
pub use view::{build_view, ResumeView};
