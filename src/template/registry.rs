//! Template registry mapping template kinds to layout variants

use std::collections::HashMap;

use tracing::debug;

use crate::renderer::layouts::{ClassicLayout, CreativeLayout, MinimalLayout, ModernLayout};
use crate::renderer::HtmlBuilder;
use crate::view::ProfileView;

use super::TemplateKind;

/// One visual arrangement of a profile page
pub trait LayoutVariant: Send + Sync {
    /// The template this variant implements
    fn kind(&self) -> TemplateKind;

    /// Variant CSS, written against the default `sp-` class prefix
    fn stylesheet(&self) -> &'static str;

    /// Render the page body for a resolved profile
    fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder);
}

/// Registry of layout variants
pub struct TemplateRegistry {
    variants: HashMap<TemplateKind, Box<dyn LayoutVariant>>,
}

impl Default for TemplateRegistry {
    /// Registry with the four built-in layouts
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ModernLayout));
        registry.register(Box::new(ClassicLayout));
        registry.register(Box::new(MinimalLayout));
        registry.register(Box::new(CreativeLayout));
        registry
    }
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Register a variant, returning the one it replaces
    pub fn register(&mut self, variant: Box<dyn LayoutVariant>) -> Option<Box<dyn LayoutVariant>> {
        self.variants.insert(variant.kind(), variant)
    }

    /// Check if a variant is registered for a kind
    pub fn contains(&self, kind: TemplateKind) -> bool {
        self.variants.contains_key(&kind)
    }

    /// Get the variant for a kind.
    ///
    /// Kinds without a registered variant use the registered modern
    /// variant, or the built-in modern layout if none is registered.
    pub fn variant(&self, kind: TemplateKind) -> &dyn LayoutVariant {
        if let Some(variant) = self.variants.get(&kind) {
            return variant.as_ref();
        }
        debug!(template = %kind, "no variant registered, using modern");
        match self.variants.get(&TemplateKind::Modern) {
            Some(variant) => variant.as_ref(),
            None => &ModernLayout,
        }
    }

    /// Render a view with the variant for its template
    pub fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
        let variant = self.variant(view.template);
        debug!(template = %variant.kind(), sections = ?view.visible_sections(), "rendering profile");
        out.add_css(variant.stylesheet());
        variant.render(view, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainModern;

    impl LayoutVariant for PlainModern {
        fn kind(&self) -> TemplateKind {
            TemplateKind::Modern
        }

        fn stylesheet(&self) -> &'static str {
            ""
        }

        fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
            out.add_text("p", &[], view.name);
        }
    }

    #[test]
    fn test_default_registers_all_templates() {
        let registry = TemplateRegistry::default();
        for kind in TemplateKind::ALL {
            assert!(registry.contains(kind));
            assert_eq!(registry.variant(kind).kind(), kind);
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = TemplateRegistry::default();
        let previous = registry.register(Box::new(PlainModern));
        assert!(previous.is_some());
        assert_eq!(registry.variant(TemplateKind::Modern).stylesheet(), "");
    }

    #[test]
    fn test_missing_variant_falls_back_to_modern() {
        let mut registry = TemplateRegistry::new();
        assert_eq!(registry.variant(TemplateKind::Classic).kind(), TemplateKind::Modern);

        registry.register(Box::new(PlainModern));
        assert_eq!(registry.variant(TemplateKind::Creative).stylesheet(), "");
    }
}
