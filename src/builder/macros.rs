//! Macros for declaring the small state enums used across the widget.

/// Declare a fieldless widget state enum.
///
/// Generates the enum with serde derives, a `VARIANTS` table in declaration
/// order, the [`State`](crate::core::State) impl, and `Default` when an
/// `initial:` variant is named. Variants listed under `error:` report
/// `is_error() == true`.
///
/// # Example
///
/// ```
/// use calcpad::state_enum;
/// use calcpad::core::State;
///
/// state_enum! {
///     pub enum Indicator {
///         Idle,
///         Busy,
///         Broken,
///     }
///     error: [Broken]
///     initial: Idle
/// }
///
/// assert_eq!(Indicator::default(), Indicator::Idle);
/// assert_eq!(Indicator::VARIANTS.len(), 3);
/// assert_eq!(Indicator::Busy.name(), "Busy");
/// assert!(Indicator::Broken.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
        $(initial: $initial:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const VARIANTS: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        $(
            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self::$initial
                }
            }
        )?
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Lamp {
            Off,
            On,
            Burnt,
        }
        error: [Burnt]
        initial: Off
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Lamp::Off.name(), "Off");
        assert!(!Lamp::On.is_error());
        assert!(Lamp::Burnt.is_error());
    }

    #[test]
    fn state_enum_generates_default_from_initial() {
        assert_eq!(Lamp::default(), Lamp::Off);
    }

    #[test]
    fn state_enum_lists_variants_in_order() {
        assert_eq!(Lamp::VARIANTS, &[Lamp::Off, Lamp::On, Lamp::Burnt]);
        let names: Vec<&str> = Lamp::VARIANTS.iter().map(State::name).collect();
        assert_eq!(names, vec!["Off", "On", "Burnt"]);
    }

    #[test]
    fn state_enum_supports_visibility_and_extra_derives() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Switch {
                Up,
                Down,
            }
        }

        let up = Switch::Up;
        let copied = up;
        assert_eq!(up, copied);
        assert!(!Switch::Down.is_error());
    }

    #[test]
    fn state_enum_serializes_by_variant_name() {
        let json = serde_json::to_string(&Lamp::On).unwrap();
        assert_eq!(json, "\"On\"");
        let back: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Lamp::On);
    }
}
