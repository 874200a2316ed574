use strum::{Display, EnumIter, EnumString};

/// Side of the trigger the tooltip is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis along which a tooltip slides in. The other axis stays centred on the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Position {

    pub fn as_class(&self) -> &'static str {
        match self {
            Position::Top => "bottom-full left-1/2 mb-2",
            Position::Bottom => "top-full left-1/2 mt-2",
            Position::Left => "right-full top-1/2 mr-2",
            Position::Right => "left-full top-1/2 ml-2",
        }
    }

    pub fn arrow_class(&self) -> &'static str {
        match self {
            Position::Top => "after:top-full after:left-1/2 after:-translate-x-1/2 after:border-[6px] after:border-t-current after:border-x-transparent after:border-b-transparent",
            Position::Bottom => "after:bottom-full after:left-1/2 after:-translate-x-1/2 after:border-[6px] after:border-b-current after:border-x-transparent after:border-t-transparent",
            Position::Left => "after:left-full after:top-1/2 after:-translate-y-1/2 after:border-[6px] after:border-l-current after:border-y-transparent after:border-r-transparent",
            Position::Right => "after:right-full after:top-1/2 after:-translate-y-1/2 after:border-[6px] after:border-r-current after:border-y-transparent after:border-l-transparent",
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Position::Top | Position::Bottom => Axis::Vertical,
            Position::Left | Position::Right => Axis::Horizontal,
        }
    }

    /// Sign of the hidden offset: the tooltip starts displaced towards the trigger.
    pub(crate) fn approach_sign(&self) -> f64 {
        match self {
            Position::Top | Position::Left => 1.0,
            Position::Bottom | Position::Right => -1.0,
        }
    }
}
