/// Generate `ALL`, `as_str`, `Display`, `FromStr`, `From<T> for String` and
/// `TryFrom<String> for T` for a closed, fieldless enum.
///
/// Unknown strings are rejected with the given `EngineError` constructor. Add
/// `#[serde(into = "String", try_from = "String")]` to the enum to serialize
/// through the short string form.
macro_rules! string_enum {
    ($name:ident, $unknown:path, { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::EngineError;

            fn from_str(s: &str) -> Result<Self, $crate::error::EngineError> {
                match s {
                    $($str => Ok($name::$variant),)+
                    other => Err($unknown(other.to_string())),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::EngineError;

            fn try_from(s: String) -> Result<Self, $crate::error::EngineError> {
                s.parse()
            }
        }
    };
}
