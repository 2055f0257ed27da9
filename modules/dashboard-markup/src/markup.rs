use std::fmt;

/// Rendered HTML. Only produced by this crate's renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub(crate) fn from_rendered(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Concatenating rendered fragments stays rendered.
impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Self(iter.into_iter().map(|m| m.0).collect())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_concatenate_in_order() {
        let joined: Markup = ["<p>a</p>", "<p>b</p>"]
            .into_iter()
            .map(|s| Markup::from_rendered(s.to_string()))
            .collect();
        assert_eq!(joined.as_str(), "<p>a</p><p>b</p>");
        assert!(Markup::default().is_empty());
    }
}
