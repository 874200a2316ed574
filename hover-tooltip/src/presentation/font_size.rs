use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FontSize {
    #[default]
    Sm,
    Base,
    Lg,
}

impl FontSize {

    pub fn as_class(&self) -> &'static str {
        match self {
            FontSize::Sm => "text-sm",
            FontSize::Base => "text-base",
            FontSize::Lg => "text-lg",
        }
    }
}
