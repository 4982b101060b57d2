//! Macros for declaring item status enums.

/// Declare an item status enum with explicit wire labels.
///
/// Generates the enum with serde renames for each label, an `ALL` constant
/// listing every variant, `Display`, and the `State` implementation. Variants
/// named in `tidy:` report `is_final() == true`.
///
/// # Example
///
/// ```
/// use tidyroom::core::State;
/// use tidyroom::status_enum;
///
/// status_enum! {
///     pub enum Dishes {
///         Sink => "sink",
///         Rack => "rack",
///         Cupboard => "cupboard",
///     }
///     tidy: [Cupboard]
/// }
///
/// assert_eq!(Dishes::Sink.name(), "sink");
/// assert!(Dishes::Cupboard.is_final());
/// assert_eq!(Dishes::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(tidy: [$($tidy:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every status, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Wire labels of `ALL`, in the same order.
            pub const LABELS: &'static [&'static str] = &[$($label),*];

            /// Wire label of this status.
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                self.label()
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$tidy => true,)*)?
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
