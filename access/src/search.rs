use serde::Deserialize;

use crate::predicate::{Field, Predicate};

/// Tokens of this many characters or fewer are ignored.
const MAX_IGNORED_TOKEN_LEN: usize = 3;

const SEARCHED_FIELDS: [Field; 5] = [
    Field::LocationName,
    Field::LocationDescription,
    Field::LocationAddress,
    Field::LocationState,
    Field::LocationCity,
];

/// Query parameters of the parking spot listing.
///
/// `location` is free text: any surviving token found in any searched location field
/// selects the spot. `size` narrows to one size category when it is a plain
/// non-negative integer and is ignored otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotSearch {
    pub location: Option<String>,
    pub size: Option<String>,
}

impl SpotSearch {
    pub fn tokens(&self) -> Vec<&str> {
        self.location
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .filter(|token| token.chars().count() > MAX_IGNORED_TOKEN_LEN)
            .collect()
    }

    fn text_predicate(&self) -> Predicate {
        let tokens = self.tokens();
        if tokens.is_empty() {
            return Predicate::Always;
        }
        Predicate::any_of(tokens.into_iter().flat_map(|token| {
            SEARCHED_FIELDS
                .into_iter()
                .map(move |field| Predicate::icontains(field, token))
        }))
    }

    fn size_predicate(&self) -> Predicate {
        match self.size.as_deref() {
            Some(size) if !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit()) => {
                // A literal too large for an id cannot name any category.
                size.parse::<i64>()
                    .map_or(Predicate::Never, |id| Predicate::is(Field::SizeId, id))
            }
            _ => Predicate::Always,
        }
    }

    pub fn predicate(&self) -> Predicate {
        self.text_predicate().and(self.size_predicate())
    }
}
