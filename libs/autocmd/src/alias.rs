//! Legacy event spellings.

use crate::event::Event;

/// A legacy spelling that Neovim accepts in place of a canonical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alias {
    /// The legacy spelling, e.g. `BufRead`.
    pub name: &'static str,
    /// The event it stands for.
    pub target: Event,
}

impl Alias {
    /// The value subscribers see, identical to the target's name.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        self.target.as_str()
    }
}

/// Every alias Neovim defines.
pub const ALIASES: &[Alias] = &[
    Alias {
        name: "BufCreate",
        target: Event::BufAdd,
    },
    Alias {
        name: "BufRead",
        target: Event::BufReadPost,
    },
    Alias {
        name: "BufWrite",
        target: Event::BufWritePre,
    },
    Alias {
        name: "FileEncoding",
        target: Event::EncodingChanged,
    },
];

/// Resolves a legacy spelling, ignoring ASCII case.
pub fn resolve_alias(name: &str) -> Option<Event> {
    ALIASES
        .iter()
        .find(|alias| alias.name.eq_ignore_ascii_case(name))
        .map(|alias| alias.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;

    #[test]
    fn test_alias_values_match_constants() {
        let expected = [
            (names::BUF_CREATE, Event::BufAdd),
            (names::BUF_READ, Event::BufReadPost),
            (names::BUF_WRITE, Event::BufWritePre),
            (names::FILE_ENCODING, Event::EncodingChanged),
        ];
        for (constant, event) in expected {
            let alias = ALIASES
                .iter()
                .find(|alias| alias.target == event)
                .unwrap();
            assert_eq!(alias.value(), constant);
        }
    }

    #[test]
    fn test_alias_names_are_not_canonical() {
        for alias in ALIASES {
            assert!(
                !Event::ALL
                    .iter()
                    .any(|e| e.as_str().eq_ignore_ascii_case(alias.name)),
                "{} shadows a canonical event",
                alias.name
            );
        }
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve_alias("BufRead"), Some(Event::BufReadPost));
        assert_eq!(resolve_alias("bufcreate"), Some(Event::BufAdd));
        assert_eq!(resolve_alias("BufReadPost"), None);
    }
}
