//! Arena view tree acting as the host container

use glam::Vec2;
use slotmap::{new_key_type, SlotMap};
use state_layout::{LayoutId, Result, ViewHost, Visibility};

use crate::catalog::LayoutCatalog;

new_key_type! {
    /// Handle to a view in a [`ViewTree`]
    pub struct ViewKey;
}

/// A single view in the tree
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// Human readable name (template name or caller supplied)
    pub name: String,
    /// Size in logical pixels
    pub size: Vec2,
    /// Visibility flag set by the container
    pub visibility: Visibility,
    /// Opacity (0.0 = transparent, 1.0 = opaque), driven by fades
    pub opacity: f32,
    /// Hidden, but still drawn while a fade-out runs
    pub ghost: bool,
    /// Parent view, `None` while detached
    pub parent: Option<ViewKey>,
    /// Child views, in insertion order
    pub children: Vec<ViewKey>,
}

impl ViewNode {
    fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            size,
            visibility: Visibility::Visible,
            opacity: 1.0,
            ghost: false,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether the view ends up on screen this frame
    pub fn is_drawn(&self) -> bool {
        self.visibility == Visibility::Visible || self.ghost
    }
}

/// Something the tree would draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: ViewKey,
    pub name: String,
    pub size: Vec2,
    pub opacity: f32,
}

/// Arena of views rooted at the state layout container
///
/// Only direct children of the root are managed by the layout. Views built
/// through [`ViewHost::inflate`] come from the tree's [`LayoutCatalog`].
#[derive(Debug, Clone)]
pub struct ViewTree {
    nodes: SlotMap<ViewKey, ViewNode>,
    root: ViewKey,
    catalog: LayoutCatalog,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new(LayoutCatalog::default())
    }
}

impl ViewTree {
    /// Create a tree with an empty root container
    pub fn new(catalog: LayoutCatalog) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(ViewNode::new("state_layout", Vec2::ZERO));
        Self {
            nodes,
            root,
            catalog,
        }
    }

    /// The container view
    pub fn root(&self) -> ViewKey {
        self.root
    }

    /// Templates available to [`ViewHost::inflate`]
    pub fn catalog(&self) -> &LayoutCatalog {
        &self.catalog
    }

    /// Mutable access to the templates, e.g. to register more
    pub fn catalog_mut(&mut self) -> &mut LayoutCatalog {
        &mut self.catalog
    }

    /// Create a detached view
    pub fn create_view(&mut self, name: impl Into<String>, size: Vec2) -> ViewKey {
        self.nodes.insert(ViewNode::new(name, size))
    }

    /// The node behind `key`, `None` once destroyed
    pub fn get(&self, key: ViewKey) -> Option<&ViewNode> {
        self.nodes.get(key)
    }

    /// Mutable access to the node behind `key`
    pub fn get_mut(&mut self, key: ViewKey) -> Option<&mut ViewNode> {
        self.nodes.get_mut(key)
    }

    /// Direct children of the container
    pub fn children(&self) -> &[ViewKey] {
        &self.nodes[self.root].children
    }

    /// Set the opacity of `key`, clamped to 0.0..=1.0
    pub fn set_opacity(&mut self, key: ViewKey, opacity: f32) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Mark `key` as still drawn while hidden
    pub fn set_ghost(&mut self, key: ViewKey, ghost: bool) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.ghost = ghost;
        }
    }

    /// Children whose visibility flag is set
    pub fn visible_children(&self) -> Vec<ViewKey> {
        self.children()
            .iter()
            .copied()
            .filter(|key| self.nodes[*key].visibility == Visibility::Visible)
            .collect()
    }

    /// Children that end up on screen this frame, in draw order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.children()
            .iter()
            .filter_map(|key| {
                let node = &self.nodes[*key];
                node.is_drawn().then(|| DrawItem {
                    key: *key,
                    name: node.name.clone(),
                    size: node.size,
                    opacity: node.opacity,
                })
            })
            .collect()
    }

    /// Drop a detached view and everything below it
    pub fn destroy(&mut self, key: ViewKey) {
        if key == self.root {
            return;
        }
        if let Some(parent) = self.nodes.get(key).and_then(|node| node.parent) {
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children.retain(|child| *child != key);
            }
        }
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.remove(key) {
                stack.extend(node.children);
            }
        }
    }
}

impl ViewHost for ViewTree {
    type View = ViewKey;

    fn contains_child(&self, view: &ViewKey) -> bool {
        self.nodes
            .get(*view)
            .is_some_and(|node| node.parent == Some(self.root))
    }

    fn add_child(&mut self, view: ViewKey) {
        let Some(node) = self.nodes.get_mut(view) else {
            return;
        };
        let previous_parent = node.parent.replace(self.root);
        if let Some(previous) = previous_parent {
            if let Some(previous) = self.nodes.get_mut(previous) {
                previous.children.retain(|child| *child != view);
            }
        }
        self.nodes[self.root].children.push(view);
    }

    fn remove_child(&mut self, view: &ViewKey) {
        if !self.contains_child(view) {
            return;
        }
        self.nodes[self.root].children.retain(|child| child != view);
        if let Some(node) = self.nodes.get_mut(*view) {
            node.parent = None;
            node.ghost = false;
        }
    }

    fn set_visibility(&mut self, view: &ViewKey, visibility: Visibility) {
        if let Some(node) = self.nodes.get_mut(*view) {
            node.visibility = visibility;
        }
    }

    fn visibility(&self, view: &ViewKey) -> Option<Visibility> {
        self.nodes.get(*view).map(|node| node.visibility)
    }

    fn inflate(&mut self, layout: &LayoutId) -> Result<ViewKey> {
        let template = self.catalog.resolve(layout)?.clone();
        Ok(self.create_view(template.name, template.size))
    }

    fn placeholder(&mut self) -> ViewKey {
        self.create_view("placeholder", Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LayoutTemplate;
    use state_layout::StateLayoutError;

    #[test]
    fn test_add_and_remove_child() {
        let mut tree = ViewTree::default();
        let view = tree.create_view("content", Vec2::new(10.0, 10.0));
        assert!(!tree.contains_child(&view));

        tree.add_child(view);
        assert!(tree.contains_child(&view));
        assert_eq!(tree.children(), &[view]);

        tree.remove_child(&view);
        assert!(!tree.contains_child(&view));
        assert!(tree.children().is_empty());
        assert!(tree.get(view).is_some());
    }

    #[test]
    fn test_add_child_twice_keeps_one_entry() {
        let mut tree = ViewTree::default();
        let view = tree.create_view("content", Vec2::ONE);
        tree.add_child(view);
        tree.add_child(view);
        assert_eq!(tree.children(), &[view]);
    }

    #[test]
    fn test_inflate_from_catalog() {
        let catalog = LayoutCatalog::new()
            .with("empty_page", LayoutTemplate::new("empty", Vec2::new(50.0, 20.0)))
            .unwrap();
        let mut tree = ViewTree::new(catalog);

        let view = tree.inflate(&LayoutId::from("empty_page")).unwrap();
        let node = tree.get(view).unwrap();
        assert_eq!(node.name, "empty");
        assert_eq!(node.parent, None);

        assert_eq!(
            tree.inflate(&LayoutId::from("missing")),
            Err(StateLayoutError::UnresolvedLayout(LayoutId::from("missing")))
        );
    }

    #[test]
    fn test_placeholder_is_zero_sized() {
        let mut tree = ViewTree::default();
        let view = tree.placeholder();
        assert_eq!(tree.get(view).unwrap().size, Vec2::ZERO);
    }

    #[test]
    fn test_draw_list_includes_ghosts() {
        let mut tree = ViewTree::default();
        let a = tree.create_view("a", Vec2::ONE);
        let b = tree.create_view("b", Vec2::ONE);
        tree.add_child(a);
        tree.add_child(b);
        tree.set_visibility(&a, Visibility::Gone);
        tree.set_visibility(&b, Visibility::Gone);
        tree.set_ghost(a, true);
        tree.set_opacity(a, 0.4);

        let drawn = tree.draw_list();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].key, a);
        assert_eq!(drawn[0].opacity, 0.4);
        assert!(tree.visible_children().is_empty());
    }

    #[test]
    fn test_destroy() {
        let mut tree = ViewTree::default();
        let view = tree.create_view("a", Vec2::ONE);
        tree.add_child(view);
        tree.destroy(view);
        assert!(tree.get(view).is_none());
        assert!(tree.children().is_empty());

        let root = tree.root();
        tree.destroy(root);
        assert!(tree.get(root).is_some());
    }
}
