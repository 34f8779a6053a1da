//! Closed value sets accepted by the `/submit` endpoint.
//!
//! Each enum serializes to the exact string the API expects and parses from
//! either that string (case-insensitive) or its kebab-case slug, so
//! `"More Human"`, `"more human"` and `"more-human"` all resolve to
//! [`Strength::MoreHuman`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in API documentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string sent on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| matches_wire(v.as_str(), needle))
                    .ok_or_else(|| {
                        ParseEnumError::new($kind, s, Self::ALL.iter().map(|v| v.as_str()))
                    })
            }
        }
    };
}

fn matches_wire(wire: &str, needle: &str) -> bool {
    wire.eq_ignore_ascii_case(needle) || wire.replace(' ', "-").eq_ignore_ascii_case(needle)
}

wire_enum! {
    /// Reading level the rewritten text should target.
    Readability, "readability" {
        HighSchool => "High School",
        University => "University",
        Doctorate => "Doctorate",
        Journalist => "Journalist",
        Marketing => "Marketing",
    }
}

wire_enum! {
    /// Kind of writing being submitted.
    Purpose, "purpose" {
        GeneralWriting => "General Writing",
        Essay => "Essay",
        Article => "Article",
        MarketingMaterial => "Marketing Material",
        Story => "Story",
        CoverLetter => "Cover Letter",
        Report => "Report",
        BusinessMaterial => "Business Material",
        LegalMaterial => "Legal Material",
    }
}

wire_enum! {
    /// Trade-off between output quality and how aggressively the text is
    /// humanized. The service picks its own default when omitted.
    Strength, "strength" {
        Quality => "Quality",
        Balanced => "Balanced",
        MoreHuman => "More Human",
    }
}
