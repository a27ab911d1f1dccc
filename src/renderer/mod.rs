//! HTML renderer for resolved profile views
//!
//! This module takes a ProfileView and produces an HTML document using the
//! layout variant registered for the view's template.

pub mod config;
pub mod html;
pub mod layouts;
pub mod sections;

pub use config::HtmlConfig;
pub use html::{escape_html, render_html, HtmlBuilder};
