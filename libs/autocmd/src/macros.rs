//! Macro for generating the typed event table.

/// Generates [`Event`](crate::Event) from a grouped table.
///
/// Each entry pairs a variant with its constant in [`crate::names`] and a
/// single doc line. The macro generates:
/// - the `Event` enum, one variant per entry
/// - `Event::ALL` in table order
/// - `as_str()` returning the `names` constant (the literal lives only there)
/// - `group()` returning the enclosing [`EventGroup`](crate::EventGroup)
/// - a raw description lookup built from the doc line
///
/// # Example
///
/// ```ignore
/// define_events! {
///     Buffer {
///         /// Just after adding a buffer to the buffer list.
///         BufAdd => BUF_ADD,
///     }
///     Ui {
///         /// After a UI connects.
///         UIEnter => UI_ENTER,
///     }
/// }
/// ```
macro_rules! define_events {
    ($(
        $group:ident {
            $(
                #[doc = $doc:literal]
                $variant:ident => $konst:ident
            ),* $(,)?
        }
    )*) => {
        /// A canonical Neovim autocmd event.
        ///
        /// The string form of each variant is the matching constant in
        /// [`crate::names`]. Legacy aliases have no variant of their own; they
        /// parse to the event they stand for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Event {
            $($(
                #[doc = $doc]
                $variant,
            )*)*
        }

        impl Event {
            /// Every canonical event, in table order.
            pub const ALL: &'static [Event] = &[$($(Event::$variant,)*)*];

            /// Returns the event name exactly as Neovim spells it.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($(Event::$variant => $crate::names::$konst,)*)*
                }
            }

            /// Returns the topical group this event belongs to.
            #[must_use]
            pub const fn group(self) -> $crate::EventGroup {
                match self {
                    $($(Event::$variant => $crate::EventGroup::$group,)*)*
                }
            }

            const fn raw_description(self) -> &'static str {
                match self {
                    $($(Event::$variant => $doc,)*)*
                }
            }
        }
    };
}

pub(crate) use define_events;
