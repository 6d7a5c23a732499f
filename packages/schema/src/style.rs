//! Closed enumerations shared by blocks, panels and the wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Wire spelling to variant; `None` for anything outside the enum
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Keyword font sizes
    TextSize, default = Md {
        Xxs => "xxs",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
        ThreeXl => "3xl",
        FourXl => "4xl",
        FiveXl => "5xl",
    }
}

impl TextSize {
    /// Sizes that read as a heading when bold
    pub fn is_large(self) -> bool {
        matches!(
            self,
            TextSize::Xl | TextSize::Xxl | TextSize::ThreeXl | TextSize::FourXl | TextSize::FiveXl
        )
    }
}

string_enum! {
    ButtonStyle, default = Primary {
        Primary => "primary",
        Secondary => "secondary",
        Link => "link",
    }
}

string_enum! {
    /// Bubble widths
    PanelSize, default = Mega {
        Nano => "nano",
        Micro => "micro",
        Deca => "deca",
        Hecto => "hecto",
        Kilo => "kilo",
        Mega => "mega",
        Giga => "giga",
    }
}

string_enum! {
    AspectRatio, default = TwentyThirteen {
        Square => "1:1",
        Wide151 => "1.51:1",
        Wide191 => "1.91:1",
        FourThree => "4:3",
        SixteenNine => "16:9",
        TwentyThirteen => "20:13",
        TwoOne => "2:1",
        ThreeOne => "3:1",
        ThreeFour => "3:4",
        NineSixteen => "9:16",
        OneTwo => "1:2",
        OneThree => "1:3",
    }
}

string_enum! {
    BoxLayout, default = Vertical {
        Vertical => "vertical",
        Horizontal => "horizontal",
        Baseline => "baseline",
    }
}

impl BoxLayout {
    /// Layouts that place children on one line
    pub fn is_inline(self) -> bool {
        matches!(self, BoxLayout::Horizontal | BoxLayout::Baseline)
    }
}
