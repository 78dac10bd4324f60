//! Macro for SQL identifier newtypes.
//!
//! Table, index, and column names all share one invariant: non-empty and
//! free of the quote characters that would have to be escaped when the name
//! is embedded in generated code.

/// Define a strongly-typed SQL identifier newtype.
///
/// Generates the struct, `try_new()`, `as_str()`, `Display`, `AsRef<str>`,
/// `Deref<Target = str>`, and `PartialEq<&str>`.
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// Wrap `name`, returning `None` if it is empty or contains a quote.
            pub fn try_new(name: impl Into<String>) -> Option<Self> {
                let s = name.into();
                if $crate::identifiers::is_plain_identifier(&s) {
                    Some(Self(s))
                } else {
                    None
                }
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub(crate) use define_identifier;
