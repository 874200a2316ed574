//! Maps a [`TooltipConfig`] onto the classes and motion states of the overlay.
//!
//! Every option is looked up on its own. An option which did not name a known
//! variant contributes nothing, it is never replaced by a default.

pub use animation::{Animation, AnimationSpec, MotionState, Offset, Transition};
pub use font_size::FontSize;
pub use position::{Axis, Position};
pub use theme::Theme;

use crate::config::TooltipConfig;

mod animation;
mod font_size;
mod position;
mod theme;

const OVERLAY_BASE_CLASSES: &str = "absolute px-4 py-2 rounded-lg font-medium tracking-wide z-50 select-none pointer-events-none";
const ARROW_BASE_CLASSES: &str = "after:content-[''] after:absolute";

#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub style_class: String,
    pub arrow_class: String,
    /// `None` when either the animation or the position is unknown.
    pub animation_spec: Option<AnimationSpec>,
}

pub fn resolve(config: &TooltipConfig) -> Presentation {

    let style_class = join_classes([
        config.theme.map(|theme| theme.as_class()),
        config.font_size.map(|font_size| font_size.as_class()),
        config.position.map(|position| position.as_class()),
    ]);

    let arrow_class = if config.arrow {
        join_classes([
            Some(ARROW_BASE_CLASSES),
            config.position.map(|position| position.arrow_class()),
            config.theme.map(|theme| theme.arrow_color_class()),
        ])
    } else {
        String::new()
    };

    let animation_spec = config.animation
        .zip(config.position)
        .map(|(animation, position)| animation.spec(position, config.distance));

    Presentation {
        style_class,
        arrow_class,
        animation_spec,
    }
}

impl Presentation {

    /// Full class list of the overlay. The caller's `class_name` comes last, so it can override.
    pub fn overlay_class(&self, config: &TooltipConfig) -> String {
        join_classes([
            Some(OVERLAY_BASE_CLASSES),
            Some(self.style_class.as_str()),
            Some(self.arrow_class.as_str()),
            Some(config.class_name.as_str()),
        ])
    }

    pub fn overlay_style(&self, config: &TooltipConfig, shown: bool) -> String {
        let max_width = format!("max-width: {};", config.max_width);
        match self.animation_spec {
            Some(spec) => format!("{max_width} {}", spec.style(shown, config.duration, config.delay)),
            None => max_width,
        }
    }
}

fn join_classes<'a>(classes: impl IntoIterator<Item=Option<&'a str>>) -> String {
    classes.into_iter()
        .flatten()
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
