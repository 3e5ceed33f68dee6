//! Scalar catalog parsing.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use treegen_core::{ScalarType, ScalarTypeOptions};

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_table_span, validate_name},
};

/// Separator placed between an enum's scope and its name when none is configured.
pub const DEFAULT_SCOPE_SEPARATOR: &str = "::";

/// Filename used in diagnostics when parsing from a plain string.
pub const DEFAULT_FILENAME: &str = "scalars.toml";

/// Named scalar type descriptors declared by a generator.
///
/// Entries from `[scalars]` come first, followed by `[enums]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarCatalog {
    scalars: IndexMap<String, ScalarType>,
}

impl ScalarCatalog {
    /// Parse a catalog with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_catalog(content, filename)
    }

    /// Look up a scalar type by name.
    pub fn get(&self, name: &str) -> Option<&ScalarType> {
        self.scalars.get(name)
    }

    /// Check if a scalar type is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Iterate over `(name, descriptor)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarType)> {
        self.scalars.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Names of all declared scalar types.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scalars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

impl FromStr for ScalarCatalog {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_catalog(s, DEFAULT_FILENAME)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    settings: Settings,
    #[serde(default)]
    scalars: IndexMap<String, ScalarTypeOptions>,
    #[serde(default)]
    enums: IndexMap<String, EnumEntry>,
}

/// Catalog-wide settings
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Settings {
    /// Separator between an enum's scope and its name
    scope_separator: Option<String>,
}

/// An enum persisted as an integer, declared inside `scope`
///
/// `name` is the enum's type name and defaults to the table key, so the same
/// enum name can be declared in several scopes under distinct keys.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumEntry {
    name: Option<String>,
    scope: Option<String>,
    default: String,
}

/// Parse a catalog from content with the given filename for error reporting.
pub fn parse_catalog(content: &str, filename: &str) -> Result<ScalarCatalog> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawCatalog = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let separator = raw
        .settings
        .scope_separator
        .as_deref()
        .unwrap_or(DEFAULT_SCOPE_SEPARATOR);

    let mut scalars = IndexMap::with_capacity(raw.scalars.len() + raw.enums.len());

    for (name, options) in raw.scalars {
        check_name(&ctx, "scalars", &name)?;

        let scalar = options.build().map_err(|e| {
            ctx.missing_primary_type_error(&name, find_table_span(ctx.src(), "scalars", &name), e)
        })?;
        tracing::debug!(
            name = %name,
            primary_type = scalar.primary_type(),
            serialized_type = scalar.serialized_type(),
            "registered scalar type"
        );
        scalars.insert(name, scalar);
    }

    for (key, entry) in raw.enums {
        check_name(&ctx, "enums", &key)?;

        if scalars.contains_key(&key) {
            return Err(ctx.duplicate_scalar_error(
                &key,
                find_table_span(ctx.src(), "scalars", &key),
                find_table_span(ctx.src(), "enums", &key),
            ));
        }

        let enum_name = entry.name.unwrap_or_else(|| key.clone());
        let scoped_name = match entry.scope.as_deref() {
            Some(scope) if !scope.is_empty() => format!("{}{}{}", scope, separator, enum_name),
            _ => enum_name.clone(),
        };
        let scalar = ScalarType::enumeration(enum_name, scoped_name, entry.default).map_err(|e| {
            ctx.missing_primary_type_error(&key, find_table_span(ctx.src(), "enums", &key), e)
        })?;
        tracing::debug!(
            name = %key,
            scoped_type = scalar.scoped_primary_type(),
            "registered enum scalar type"
        );
        scalars.insert(key, scalar);
    }

    tracing::info!(
        filename = ctx.filename(),
        count = scalars.len(),
        "parsed scalar catalog"
    );
    Ok(ScalarCatalog { scalars })
}

fn check_name(ctx: &SourceContext, table: &str, name: &str) -> Result<()> {
    match validate_name(name) {
        Some(reason) => Err(ctx.invalid_name_error(
            name,
            reason,
            find_table_span(ctx.src(), table, name),
        )),
        None => Ok(()),
    }
}
