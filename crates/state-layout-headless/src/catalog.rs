//! Named layout templates

use std::collections::HashMap;

use glam::Vec2;
use state_layout::{LayoutId, Result, StateLayoutError};

/// What a view built from a layout looks like
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTemplate {
    /// Human readable name given to built views
    pub name: String,
    /// Size of built views in logical pixels
    pub size: Vec2,
}

impl LayoutTemplate {
    /// Template for views named `name` with the given size
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Registry of layouts a [`ViewTree`](crate::ViewTree) can inflate
#[derive(Debug, Clone, Default)]
pub struct LayoutCatalog {
    templates: HashMap<LayoutId, LayoutTemplate>,
}

impl LayoutCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `id`
    ///
    /// Registering the same id twice is a configuration error.
    pub fn register(&mut self, id: impl Into<LayoutId>, template: LayoutTemplate) -> Result<()> {
        let id = id.into();
        if self.templates.contains_key(&id) {
            return Err(StateLayoutError::DuplicateLayout(id));
        }
        self.templates.insert(id, template);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, id: impl Into<LayoutId>, template: LayoutTemplate) -> Result<Self> {
        self.register(id, template)?;
        Ok(self)
    }

    /// Look up the template for `id`
    pub fn resolve(&self, id: &LayoutId) -> Result<&LayoutTemplate> {
        self.templates.get(id).ok_or_else(|| {
            log::warn!("layout `{id}` is not in the catalog");
            StateLayoutError::UnresolvedLayout(id.clone())
        })
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &LayoutId) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let catalog = LayoutCatalog::new()
            .with("error_page", LayoutTemplate::new("error", Vec2::new(320.0, 200.0)))
            .unwrap();

        let template = catalog.resolve(&LayoutId::from("error_page")).unwrap();
        assert_eq!(template.name, "error");
        assert_eq!(template.size, Vec2::new(320.0, 200.0));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unknown_layout() {
        let catalog = LayoutCatalog::new();
        assert_eq!(
            catalog.resolve(&LayoutId::from("nope")),
            Err(StateLayoutError::UnresolvedLayout(LayoutId::from("nope")))
        );
    }

    #[test]
    fn test_duplicate_layout() {
        let mut catalog = LayoutCatalog::new();
        catalog
            .register("page", LayoutTemplate::new("a", Vec2::ONE))
            .unwrap();
        assert_eq!(
            catalog.register("page", LayoutTemplate::new("b", Vec2::ONE)),
            Err(StateLayoutError::DuplicateLayout(LayoutId::from("page")))
        );
    }
}
