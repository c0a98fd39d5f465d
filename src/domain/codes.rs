//! Enumerated field vocabularies
//!
//! Every enumerated record field accepts a closed set of literal tokens as
//! they appear in the input files. Each set is modelled as an enum whose
//! `FromStr` accepts exactly those tokens and whose `Display` writes them
//! back unchanged.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal token used in input files and reports
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(format!(
                        "Unknown {} '{}'. Must be one of: {}",
                        stringify!($name),
                        s,
                        [$($token),+].join(", ")
                    )),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

code_enum! {
    /// Gender marker
    pub enum Gender {
        Male => "муж.",
        Female => "жен.",
    }
}

code_enum! {
    /// Highest completed level of education
    pub enum EducationLevel {
        Higher => "высшее",
        /// Specialised secondary (vocational) education
        SecondarySpecial => "ср.спец",
        Secondary => "среднее",
    }
}

code_enum! {
    /// Profession of a hospital employee
    pub enum Profession {
        Doctor => "врач",
        Nurse => "медицинская сестра",
    }
}

code_enum! {
    /// Qualification category of a doctor
    pub enum DoctorCategory {
        Highest => "высшая",
        First => "первая",
        Second => "вторая",
    }
}

code_enum! {
    /// Social status of a patient
    pub enum PatientStatus {
        Worker => "рабочий",
        Clerk => "служащий",
        Student => "обучающийся",
    }
}

code_enum! {
    /// Rhesus factor sign
    pub enum Rhesus {
        Positive => "+",
        Negative => "-",
    }
}

code_enum! {
    /// Health group assigned to an ambulatory patient
    pub enum HealthGroup {
        I => "I",
        II => "II",
        III => "III",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("муж.", Gender::Male)]
    #[test_case("жен.", Gender::Female)]
    fn test_gender_tokens(token: &str, expected: Gender) {
        assert_eq!(token.parse::<Gender>().unwrap(), expected);
        assert_eq!(expected.to_string(), token);
    }

    #[test_case("муж")]
    #[test_case("Муж.")]
    #[test_case("")]
    fn test_gender_rejects_near_misses(token: &str) {
        assert!(token.parse::<Gender>().is_err());
    }

    #[test]
    fn test_every_variant_round_trips_through_its_token() {
        for level in EducationLevel::ALL {
            assert_eq!(level.as_str().parse::<EducationLevel>().unwrap(), *level);
        }
        for group in HealthGroup::ALL {
            assert_eq!(group.as_str().parse::<HealthGroup>().unwrap(), *group);
        }
    }

    #[test]
    fn test_rhesus_accepts_single_sign_only() {
        assert_eq!("+".parse::<Rhesus>().unwrap(), Rhesus::Positive);
        assert_eq!("-".parse::<Rhesus>().unwrap(), Rhesus::Negative);
        assert!("+-".parse::<Rhesus>().is_err());
        assert!("".parse::<Rhesus>().is_err());
    }

    #[test]
    fn test_unknown_token_message_lists_choices() {
        let err = "IV".parse::<HealthGroup>().unwrap_err();
        assert_eq!(err, "Unknown HealthGroup 'IV'. Must be one of: I, II, III");
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&Profession::Nurse).unwrap();
        assert_eq!(json, "\"медицинская сестра\"");
    }
}
