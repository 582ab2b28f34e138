//! Property sheet shown by the host's source settings dialog

/// Kind of a property widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Checkbox
    Bool,
}

/// One property of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Settings key the property edits
    pub name: &'static str,
    /// Label shown to the user
    pub description: &'static str,
    /// Widget kind
    pub kind: PropertyKind,
}

/// Ordered list of properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySheet {
    properties: Vec<Property>,
}

impl PropertySheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a checkbox
    pub fn add_bool(&mut self, name: &'static str, description: &'static str) -> &mut Self {
        self.properties.push(Property {
            name,
            description,
            kind: PropertyKind::Bool,
        });
        self
    }

    /// Properties in display order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by settings key
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}
