//! Macro for string-valued wire enums that tolerate unknown values
//!
//! Several wire values (feedback events, for instance) are defined by the
//! server and grow over time. Enums using this macro keep named variants for
//! the values the client knows about plus an `Other(String)` variant, and
//! (de)serialize as plain strings so unknown values pass through unchanged.
//!
//! # Example
//!
//! ```rust
//! use riskguard_domain::impl_open_string_enum;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! pub enum Channel {
//!     Web,
//!     Mobile,
//!     Other(String),
//! }
//!
//! impl_open_string_enum!(Channel {
//!     Web => "web",
//!     Mobile => "mobile",
//! });
//!
//! assert_eq!(Channel::from("web"), Channel::Web);
//! assert_eq!(Channel::from("kiosk").as_str(), "kiosk");
//! ```

/// Implements `as_str`, Display, `From<&str>`, `From<String>`, Serialize and
/// Deserialize for an enum with an `Other(String)` fallback variant.
///
/// Parsing is exact (case-sensitive): the server's spelling is forwarded as
/// is.
#[macro_export]
macro_rules! impl_open_string_enum {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $enum_name {
            fn from(s: &str) -> Self {
                match s {
                    $($str => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $enum_name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}
