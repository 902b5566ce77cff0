//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! ├── SiteStyles
//! └── App
//!     ├── Nav           data-section="navigation"
//!     ├── Hero          data-section="hero"
//!     ├── Features      data-section="features"    #technology
//!     ├── Specs         data-section="specs"       #specs
//!     ├── WhitePaper    data-section="whitepaper"  #whitepaper
//!     └── Footer        data-section="footer"      #contact
//! ```
//!
//! The WASM bundle mounts `SiteStyles` and `App` directly; the static
//! export wraps them in [`PageDocument`].

mod brand;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod specs;
mod whitepaper;

pub use brand::Brand;
pub use document::{App, PageDocument, PageMeta, SiteStyles, nav_script};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Glyph, Icon};
pub use nav::Nav;
pub use specs::Specs;
pub use whitepaper::WhitePaper;
