use serde::{Deserialize, Serialize};

/// Number of houses on the wheel.
pub const HOUSE_COUNT: usize = 12;

/// One of the twelve life domains on the reading wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    /// Position on the wheel, 1 through 12.
    pub ordinal: u8,
    /// Display name ("First House").
    pub name: String,
    /// Default keyword ("Genesis").
    pub keyword: String,
    /// Life areas this house governs.
    pub description: String,
    /// Question-specific keyword overlay, set per reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_keyword: Option<String>,
}

impl House {
    /// Create a house without a context overlay.
    pub fn new(
        ordinal: u8,
        name: impl Into<String>,
        keyword: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            name: name.into(),
            keyword: keyword.into(),
            description: description.into(),
            context_keyword: None,
        }
    }

    /// The keyword to show: the context overlay if present, else the default.
    pub fn display_keyword(&self) -> &str {
        self.context_keyword.as_deref().unwrap_or(&self.keyword)
    }

    /// Return a copy carrying the given context keyword.
    pub fn with_context(&self, keyword: impl Into<String>) -> Self {
        Self {
            context_keyword: Some(keyword.into()),
            ..self.clone()
        }
    }
}

/// House ordinal (1-based) for the charm at `position` in a draw.
pub fn house_for_position(position: usize) -> u8 {
    // HOUSE_COUNT is 12, so the cast cannot truncate.
    (position % HOUSE_COUNT) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_keyword_prefers_context() {
        let house = House::new(1, "First House", "Genesis", "Self");
        assert_eq!(house.display_keyword(), "Genesis");
        let ctx = house.with_context("Self-Image");
        assert_eq!(ctx.display_keyword(), "Self-Image");
        assert_eq!(ctx.keyword, "Genesis");
    }

    #[test]
    fn positions_wrap_around_the_wheel() {
        assert_eq!(house_for_position(0), 1);
        assert_eq!(house_for_position(11), 12);
        assert_eq!(house_for_position(12), 1);
        assert_eq!(house_for_position(25), 2);
    }

    #[test]
    fn context_keyword_omitted_when_absent() {
        let house = House::new(4, "Fourth House", "Foundation", "Home");
        let json = serde_json::to_string(&house).unwrap();
        assert!(!json.contains("context_keyword"));
        let back: House = serde_json::from_str(&json).unwrap();
        assert_eq!(back, house);
    }

    proptest! {
        #[test]
        fn every_position_lands_on_the_wheel(position in 0usize..10_000) {
            let ordinal = house_for_position(position);
            prop_assert!((1..=12).contains(&ordinal));
            prop_assert_eq!(ordinal, house_for_position(position + HOUSE_COUNT));
        }
    }
}
