use std::collections::BTreeMap;

/// Stable identifier of an animated page element.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Vertical placement of an element in document coordinates (px).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementLayout {
    pub top: f64,
    pub height: f64,
}

/// Elements currently present on the page.
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    layouts: BTreeMap<ElementId, ElementLayout>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or move an element. Returns the previous layout, if any.
    pub fn insert(&mut self, id: ElementId, layout: ElementLayout) -> Option<ElementLayout> {
        self.layouts.insert(id, layout)
    }

    pub fn remove(&mut self, id: &ElementId) -> Option<ElementLayout> {
        self.layouts.remove(id)
    }

    pub fn get(&self, id: &ElementId) -> Option<&ElementLayout> {
        self.layouts.get(id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.layouts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ElementLayout)> {
        self.layouts.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/element.rs"]
mod tests;
