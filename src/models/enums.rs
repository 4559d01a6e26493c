use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(MessageSender {
    User => "user",
    System => "system",
});

str_enum!(SourceMode {
    Remote => "remote",
    Local => "local",
});

// Declaration order is the evaluation priority of the fallback synthesizer.
str_enum!(Category {
    Headache => "headache",
    SoreThroat => "sore_throat",
    Fever => "fever",
    Cough => "cough",
    Rhinitis => "rhinitis",
    AbdominalPain => "abdominal_pain",
    NauseaVomiting => "nausea_vomiting",
    Diarrhea => "diarrhea",
    Skin => "skin",
    Dyspnea => "dyspnea",
    Hypertension => "hypertension",
    Allergy => "allergy",
    Unspecified => "unspecified",
});
