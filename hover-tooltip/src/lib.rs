//! A tooltip component for Leptos.
//!
//! The tooltip appears next to its children while they are hovered,
//! or toggles when they are clicked. In persistent mode, it stays
//! open until the pointer goes down somewhere outside of it.
//!
//! Theme, position, animation and font size are looked up from
//! static Tailwind class tables, see [`presentation`].
//! The show/hide rules live in [`visibility`] and do not depend
//! on a browser, so they can be used and tested on their own.

pub use config::TooltipConfig;
pub use error::Error;
pub use presentation::{Animation, FontSize, Position, Theme};
pub use tooltip::{ConfiguredTooltip, Tooltip};

pub mod config;
pub mod outside_click;
pub mod presentation;
pub mod visibility;

mod error;
mod tooltip;
