use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::Error;
use crate::presentation::{Animation, FontSize, Position, Theme};
use crate::visibility::Interaction;

pub const DEFAULT_DELAY: f64 = 0.1;
pub const DEFAULT_DURATION: f64 = 0.3;
pub const DEFAULT_DISTANCE: f64 = 8.0;
pub const DEFAULT_MAX_WIDTH: &str = "250px";

/// Options of a single tooltip. Fixed for as long as the tooltip is mounted.
///
/// The enum-valued options are `None` when a configuration string named an unknown
/// variant. Such an option resolves to an empty style contribution.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    pub text: String,
    pub position: Option<Position>,
    pub theme: Option<Theme>,
    pub animation: Option<Animation>,
    pub font_size: Option<FontSize>,
    /// Seconds before the tooltip starts to appear.
    pub delay: f64,
    /// Seconds the show and hide transitions take.
    pub duration: f64,
    /// Pixels the tooltip travels while appearing.
    pub distance: f64,
    pub max_width: String,
    pub arrow: bool,
    pub show_on_click: bool,
    pub persistent: bool,
    /// Interprets `text` as markup. The markup is injected unsanitized, so `text` must be trusted.
    pub rich: bool,
    pub class_name: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: Some(Position::default()),
            theme: Some(Theme::default()),
            animation: Some(Animation::default()),
            font_size: Some(FontSize::default()),
            delay: DEFAULT_DELAY,
            duration: DEFAULT_DURATION,
            distance: DEFAULT_DISTANCE,
            max_width: String::from(DEFAULT_MAX_WIDTH),
            arrow: true,
            show_on_click: false,
            persistent: false,
            rich: false,
            class_name: String::new(),
        }
    }
}

impl TooltipConfig {

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn interaction(&self) -> Interaction {
        Interaction {
            show_on_click: self.show_on_click,
            persistent: self.persistent,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = max_width.into();
        self
    }

    pub fn with_arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    pub fn with_show_on_click(mut self, show_on_click: bool) -> Self {
        self.show_on_click = show_on_click;
        self
    }

    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn with_rich(mut self, rich: bool) -> Self {
        self.rich = rich;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTooltipConfig {
    #[serde(default)]
    text: String,
    position: Option<String>,
    theme: Option<String>,
    animation: Option<String>,
    font_size: Option<String>,
    delay: Option<f64>,
    duration: Option<f64>,
    distance: Option<f64>,
    max_width: Option<String>,
    arrow: Option<bool>,
    show_on_click: Option<bool>,
    persistent: Option<bool>,
    rich: Option<bool>,
    class_name: Option<String>,
}

impl<'de> Deserialize<'de> for TooltipConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let raw: RawTooltipConfig = Deserialize::deserialize(deserializer)?;

        Ok(TooltipConfig {
            text: raw.text,
            position: lookup("position", raw.position),
            theme: lookup("theme", raw.theme),
            animation: lookup("animation", raw.animation),
            font_size: lookup("fontSize", raw.font_size),
            delay: raw.delay.unwrap_or(DEFAULT_DELAY),
            duration: raw.duration.unwrap_or(DEFAULT_DURATION),
            distance: raw.distance.unwrap_or(DEFAULT_DISTANCE),
            max_width: raw.max_width.unwrap_or_else(|| String::from(DEFAULT_MAX_WIDTH)),
            arrow: raw.arrow.unwrap_or(true),
            show_on_click: raw.show_on_click.unwrap_or(false),
            persistent: raw.persistent.unwrap_or(false),
            rich: raw.rich.unwrap_or(false),
            class_name: raw.class_name.unwrap_or_default(),
        })
    }
}

/// An absent option takes its default, an unknown one resolves to `None`.
fn lookup<T>(option: &str, value: Option<String>) -> Option<T>
where T: FromStr + Default {
    match value {
        None => Some(T::default()),
        Some(value) => match T::from_str(&value) {
            Ok(variant) => Some(variant),
            Err(_) => {
                warn!("Unknown value '{value}' for tooltip option '{option}'. It will not contribute any style.");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn A_TooltipConfig_should_default_to_the_documented_values() -> Result<()> {
        let config = TooltipConfig::default();

        assert_that!(config, matches_pattern!(TooltipConfig {
            position: some(eq(Position::Top)),
            theme: some(eq(Theme::Modern)),
            animation: some(eq(Animation::Smooth)),
            font_size: some(eq(FontSize::Sm)),
            delay: eq(0.1),
            duration: eq(0.3),
            distance: eq(8.0),
            max_width: eq("250px"),
            arrow: eq(true),
            show_on_click: eq(false),
            persistent: eq(false),
            rich: eq(false),
        }));
        Ok(())
    }

    #[test]
    fn A_TooltipConfig_should_be_parsed_from_camel_case_json() -> Result<()> {
        let json = r#"{
            "text": "<b>Saved</b>",
            "position": "left",
            "theme": "glass",
            "animation": "elastic",
            "fontSize": "lg",
            "delay": 0,
            "maxWidth": "20rem",
            "showOnClick": true,
            "persistent": true,
            "rich": true,
            "className": "shadow-none"
        }"#;

        let config = TooltipConfig::from_json(json).unwrap();

        assert_that!(config, eq(
            TooltipConfig::new("<b>Saved</b>")
                .with_position(Position::Left)
                .with_theme(Theme::Glass)
                .with_animation(Animation::Elastic)
                .with_font_size(FontSize::Lg)
                .with_delay(0.0)
                .with_max_width("20rem")
                .with_show_on_click(true)
                .with_persistent(true)
                .with_rich(true)
                .with_class_name("shadow-none")
        ));
        Ok(())
    }

    #[test]
    fn An_unknown_option_value_should_resolve_to_no_match() -> Result<()> {
        let config = TooltipConfig::from_json(r#"{ "text": "Hi", "animation": "wobble", "fontSize": "xl" }"#).unwrap();

        assert_that!(config.animation, none());
        assert_that!(config.font_size, none());
        assert_that!(config.theme, some(eq(Theme::Modern)));
        Ok(())
    }

    #[test]
    fn A_malformed_TooltipConfig_should_be_rejected() -> Result<()> {
        assert_that!(TooltipConfig::from_json(r#"{ "text": "Hi", "arrow": "yes" }"#), err(anything()));
        assert_that!(TooltipConfig::from_json("not json"), err(anything()));
        Ok(())
    }
}
