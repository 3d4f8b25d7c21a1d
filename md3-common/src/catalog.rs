//! Component registry
//!
//! Static catalog mapping a component id to its metadata, props schema and
//! canonical example snippet. The built-in catalog is declared in
//! `catalog.yaml` and embedded at compile time.

use crate::schema::{check_schema, PropsFieldSchema, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../catalog.yaml");

/// Registry construction errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Component id '{0}' is registered twice")]
    DuplicateId(String),
    #[error("Component id must not be empty")]
    EmptyId,
    #[error("Invalid schema for component '{id}': {source}")]
    Schema {
        id: String,
        #[source]
        source: SchemaError,
    },
}

/// Component category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Atomic,
    Composite,
    CompositeGroup,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Atomic,
        Category::Composite,
        Category::CompositeGroup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Atomic => "atomic",
            Category::Composite => "composite",
            Category::CompositeGroup => "composite-group",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Atomic => "Atomic",
            Category::Composite => "Composite",
            Category::CompositeGroup => "Composite Group",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter applied in the gallery
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// "all" followed by every category, in display order
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(Self::Only))
    }
}

/// Display metadata for one component. Immutable once registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComponentMetadata {
    /// Case-insensitive substring match on name or description
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// A registered component: metadata, schema and example code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentEntry {
    pub metadata: ComponentMetadata,
    pub schema: Vec<PropsFieldSchema>,
    pub example: Option<String>,
}

impl ComponentEntry {
    pub fn new(metadata: ComponentMetadata) -> Self {
        Self {
            metadata,
            schema: Vec::new(),
            example: None,
        }
    }

    pub fn with_schema(mut self, schema: Vec<PropsFieldSchema>) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// YAML file structure for a catalog
#[derive(Debug, Deserialize)]
struct CatalogYaml {
    components: Vec<ComponentYaml>,
}

#[derive(Debug, Deserialize)]
struct ComponentYaml {
    id: String,
    name: String,
    category: Category,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    props: Vec<PropsFieldSchema>,
}

impl From<ComponentYaml> for ComponentEntry {
    fn from(yaml: ComponentYaml) -> Self {
        ComponentEntry {
            metadata: ComponentMetadata {
                id: yaml.id,
                name: yaml.name,
                category: yaml.category,
                description: yaml.description,
                tags: yaml.tags,
            },
            schema: yaml.props,
            example: yaml.example.map(|e| e.trim_end().to_string()),
        }
    }
}

/// Ordered catalog of components.
///
/// Lookups and filtering are linear scans: the catalog holds tens of
/// entries and is filtered once per keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: Vec<ComponentEntry>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the playground
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a YAML catalog
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let catalog: CatalogYaml = serde_yaml::from_str(yaml)?;
        let mut registry = Self::new();
        for component in catalog.components {
            registry.register(component.into())?;
        }
        debug!("Loaded catalog with {} components", registry.len());
        Ok(registry)
    }

    /// Add an entry, checking id uniqueness and schema invariants
    pub fn register(&mut self, entry: ComponentEntry) -> Result<(), RegistryError> {
        let id = &entry.metadata.id;
        if id.is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if self.find(id).is_some() {
            return Err(RegistryError::DuplicateId(id.clone()));
        }
        check_schema(&entry.schema).map_err(|source| RegistryError::Schema {
            id: id.clone(),
            source,
        })?;
        self.entries.push(entry);
        Ok(())
    }

    /// Every component in registration order
    pub fn list_all(&self) -> impl Iterator<Item = &ComponentMetadata> {
        self.entries.iter().map(|e| &e.metadata)
    }

    pub fn find(&self, id: &str) -> Option<&ComponentMetadata> {
        self.entry(id).map(|e| &e.metadata)
    }

    pub fn entry(&self, id: &str) -> Option<&ComponentEntry> {
        self.entries.iter().find(|e| e.metadata.id == id)
    }

    /// Schema for `id`, empty when the id is unknown or has no props
    pub fn schema_for(&self, id: &str) -> &[PropsFieldSchema] {
        self.entry(id).map(|e| e.schema.as_slice()).unwrap_or(&[])
    }

    pub fn example_code(&self, id: &str) -> Option<&str> {
        self.entry(id).and_then(|e| e.example.as_deref())
    }

    /// Components whose name or description contains `search`
    /// (case-insensitive) and whose category passes `category`
    pub fn filter(&self, search: &str, category: CategoryFilter) -> Vec<&ComponentMetadata> {
        self.list_all()
            .filter(|m| m.matches_search(search) && category.matches(m.category))
            .collect()
    }

    /// Number of components matching `search` per category filter, in
    /// [`CategoryFilter::options`] order
    pub fn count_by_category(&self, search: &str) -> Vec<(CategoryFilter, usize)> {
        CategoryFilter::options()
            .map(|filter| (filter, self.filter(search, filter).len()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn meta(id: &str, name: &str, description: &str) -> ComponentMetadata {
        ComponentMetadata {
            id: id.into(),
            name: name.into(),
            category: Category::Atomic,
            description: description.into(),
            tags: vec![],
        }
    }

    fn four_components() -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        for m in [
            meta("button", "Button", "Clickable action"),
            meta("typography", "Typography", "Text styles"),
            meta("chip", "Chip", "Compact element"),
            meta("textfield", "TextField", "Text input"),
        ] {
            registry.register(ComponentEntry::new(m)).unwrap();
        }
        registry
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let registry = ComponentRegistry::builtin().unwrap();
        let ids: Vec<_> = registry.list_all().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["button", "typography", "chip", "textfield", "switch", "card", "dialog"]
        );
        assert_eq!(registry.schema_for("button")[0].name, "variant");
        assert!(registry.example_code("button").is_some());
        assert!(registry.schema_for("card").is_empty());
    }

    #[test]
    fn test_unknown_id_is_a_miss_not_an_error() {
        let registry = four_components();
        assert!(registry.find("slider").is_none());
        assert!(registry.schema_for("slider").is_empty());
        assert!(registry.example_code("slider").is_none());
    }

    #[test]
    fn test_search_chip_matches_exactly_one() {
        let registry = four_components();
        let found = registry.filter("chip", CategoryFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "chip");
    }

    #[test]
    fn test_search_is_case_insensitive_over_description() {
        let registry = four_components();
        let ids: Vec<_> = registry
            .filter("TEXT", CategoryFilter::All)
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["typography", "textfield"]);
    }

    #[test]
    fn test_empty_search_returns_all_in_order() {
        let registry = four_components();
        assert_eq!(registry.filter("", CategoryFilter::All).len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let registry = ComponentRegistry::builtin().unwrap();
        let composite: Vec<_> = registry
            .filter("", CategoryFilter::Only(Category::Composite))
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(composite, vec!["card"]);
        assert!(registry
            .filter("button", CategoryFilter::Only(Category::CompositeGroup))
            .is_empty());
    }

    #[test]
    fn test_count_by_category() {
        let registry = ComponentRegistry::builtin().unwrap();
        let counts = registry.count_by_category("");
        assert_eq!(counts[0], (CategoryFilter::All, 7));
        assert_eq!(counts[1], (CategoryFilter::Only(Category::Atomic), 5));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut registry = four_components();
        let err = registry
            .register(ComponentEntry::new(meta("chip", "Chip 2", "")))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "chip"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_select_without_options_fails_to_build() {
        let yaml = r#"
components:
  - id: broken
    name: Broken
    category: atomic
    description: Select field with no options
    props:
      - name: variant
        kind: select
        label: Variant
"#;
        let err = ComponentRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Schema {
                source: SchemaError::MissingOptions { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_yaml_parses_kinds_and_categories() {
        let yaml = r#"
components:
  - id: banner
    name: Banner
    category: composite-group
    description: Page banner
    tags: [feedback]
    props:
      - name: dismissible
        kind: toggle-chip
        label: Dismissible
        default: true
"#;
        let registry = ComponentRegistry::from_yaml(yaml).unwrap();
        let banner = registry.find("banner").unwrap();
        assert_eq!(banner.category, Category::CompositeGroup);
        assert_eq!(banner.tags, vec!["feedback"]);
        assert_eq!(registry.schema_for("banner")[0].kind, FieldKind::ToggleChip);
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = ComponentRegistry::from_yaml("components: [").unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}
