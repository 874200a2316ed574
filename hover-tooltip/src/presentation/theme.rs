use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Elegant,
    Frost,
    Neon,
    Soft,
    Glass,
}

impl Theme {

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Modern => "bg-slate-900 text-white shadow-lg shadow-slate-900/20",
            Theme::Elegant => "bg-white/95 text-slate-900 shadow-xl border border-slate-200/50 backdrop-blur-sm",
            Theme::Frost => "bg-white/20 backdrop-blur-md text-white shadow-lg border border-white/30",
            Theme::Neon => "bg-black/90 text-white shadow-lg border-2 border-purple-500/50 shadow-purple-500/20",
            Theme::Soft => "bg-slate-100 text-slate-700 shadow-md border border-slate-200",
            Theme::Glass => "bg-white/10 backdrop-blur-lg border border-white/20 text-white shadow-xl",
        }
    }

    /// Colours all four borders of the arrow with the background of the bubble.
    /// The position classes make three of them transparent again.
    pub fn arrow_color_class(&self) -> &'static str {
        match self {
            Theme::Modern => "after:border-t-slate-900 after:border-b-slate-900 after:border-l-slate-900 after:border-r-slate-900",
            Theme::Elegant => "after:border-t-white/95 after:border-b-white/95 after:border-l-white/95 after:border-r-white/95",
            Theme::Frost => "after:border-t-white/20 after:border-b-white/20 after:border-l-white/20 after:border-r-white/20",
            Theme::Neon => "after:border-t-black/90 after:border-b-black/90 after:border-l-black/90 after:border-r-black/90",
            Theme::Soft => "after:border-t-slate-100 after:border-b-slate-100 after:border-l-slate-100 after:border-r-slate-100",
            Theme::Glass => "after:border-t-white/10 after:border-b-white/10 after:border-l-white/10 after:border-r-white/10",
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use std::str::FromStr;

    use googletest::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn A_Theme_should_be_parsable_from_its_lowercase_name() -> Result<()> {
        for theme in Theme::iter() {
            assert_that!(Theme::from_str(&theme.to_string()), ok(eq(theme)));
        }
        assert_that!(Theme::from_str("sepia"), err(anything()));
        Ok(())
    }

    #[test]
    fn The_arrow_colour_of_a_Theme_should_match_its_background() -> Result<()> {
        for theme in Theme::iter() {
            let background = theme.as_class()
                .split_whitespace()
                .find_map(|class| class.strip_prefix("bg-"))
                .expect("every theme declares a background");

            assert_that!(theme.arrow_color_class(), contains_substring(format!("after:border-t-{background}")));
        }
        Ok(())
    }
}
