//! Family declaration macro
//!
//! [`named_values!`](crate::named_values) turns a list of `(id, name)` pairs
//! into a family type. The generated type:
//!
//! - has private fields, so members can only come from the declaration
//! - exposes each member as an associated constant plus an ordered `ALL` slice
//! - implements [`NamedValue`](crate::NamedValue)
//! - compares equal and hashes by `id`, orders by `name`, displays as `name`
//! - parses from its `id` via `FromStr` and `TryFrom<&str>`
//! - serializes as its `id` string
//!
//! ```
//! sharedkernel_core::named_values! {
//!     /// Traffic light colors
//!     pub struct Light {
//!         /// Stop
//!         RED = ("r", "Red"),
//!         /// Go
//!         GREEN = ("g", "Green"),
//!     }
//! }
//!
//! assert_eq!(Light::RED.to_string(), "Red");
//! assert_eq!("g".parse::<Light>().unwrap(), Light::GREEN);
//! ```

/// Declare a closed family of named values
#[macro_export]
macro_rules! named_values {
    (
        $(#[$meta:meta])*
        $vis:vis struct $family:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = ($id:literal, $name:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $family {
            id: &'static str,
            name: &'static str,
        }

        impl $family {
            $(
                $(#[$member_meta])*
                pub const $member: $family = $family { id: $id, name: $name };
            )+

            /// Every member, in declaration order
            pub const ALL: &[$family] = &[$($family::$member),+];

            /// Stable identifier
            pub const fn id(&self) -> &'static str {
                self.id
            }

            /// Display label
            pub const fn name(&self) -> &'static str {
                self.name
            }
        }

        impl $crate::NamedValue for $family {
            const FAMILY: &'static str = stringify!($family);

            fn id(&self) -> &'static str {
                self.id
            }

            fn name(&self) -> &'static str {
                self.name
            }

            fn members() -> &'static [Self] {
                Self::ALL
            }
        }

        impl ::std::cmp::PartialEq for $family {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl ::std::cmp::Eq for $family {}

        impl ::std::hash::Hash for $family {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.id, state);
            }
        }

        impl ::std::cmp::PartialOrd for $family {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $family {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                $crate::compare(self, ::std::option::Option::Some(other))
            }
        }

        impl ::std::fmt::Display for $family {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name)
            }
        }

        impl ::std::str::FromStr for $family {
            type Err = $crate::NamedValueError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::from_id::<$family>(s).copied()
            }
        }

        impl ::std::convert::TryFrom<&str> for $family {
            type Error = $crate::NamedValueError;

            fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
                $crate::from_id::<$family>(s).copied()
            }
        }

        impl $crate::__private::serde::Serialize for $family {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.id)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $family {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let id = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                $crate::from_id::<$family>(&id)
                    .copied()
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
