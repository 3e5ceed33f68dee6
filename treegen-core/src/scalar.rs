//! Scalar field type descriptors.
//!
//! A [`ScalarType`] records how one logical scalar field is spelled in each
//! representation the generator emits: the primary language, a secondary
//! language, and the serialized schema. Every default is resolved when the
//! descriptor is built; afterwards it is read-only.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Type metadata for a scalar field across all emitted representations.
///
/// Build one with [`ScalarType::new`], [`ScalarType::builder`] or
/// [`ScalarTypeOptions::build`].
///
/// # Example
///
/// ```
/// use treegen_core::ScalarType;
///
/// let join_type = ScalarType::builder("JoinType")
///     .is_enum(true)
///     .scoped_primary_type("ASTJoin::JoinType")
///     .serialized_type("int32")
///     .primary_default("DEFAULT_JOIN_TYPE")
///     .build()?;
///
/// assert_eq!(join_type.secondary_type(), "JoinType");
/// assert!(!join_type.has_serializer_setter());
/// # Ok::<(), treegen_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarType {
    primary_type: String,
    is_enum: bool,
    passed_by_reference: bool,
    secondary_type: String,
    secondary_reference_type: String,
    serialized_type: String,
    has_serializer_setter: bool,
    scoped_primary_type: String,
    secondary_default: Option<String>,
    primary_default: Option<String>,
    omit_if_default: bool,
}

impl ScalarType {
    /// Create a descriptor with every option left at its default.
    pub fn new(primary_type: impl Into<String>) -> Result<Self> {
        Self::builder(primary_type).build()
    }

    /// Start building a descriptor for `primary_type`.
    pub fn builder(primary_type: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder::new(primary_type)
    }

    /// Descriptor for an enum persisted as an integer and declared inside an
    /// enclosing type.
    ///
    /// `scoped_name` is the enum name as referenced from outside its scope.
    pub fn enumeration(
        enum_name: impl Into<String>,
        scoped_name: impl Into<String>,
        primary_default: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(enum_name)
            .is_enum(true)
            .scoped_primary_type(scoped_name)
            .primary_default(primary_default)
            .build()
    }

    /// Type name in the primary target language.
    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    /// Whether the value is an enumeration persisted as an integer.
    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    /// Whether constructors and accessors take this type by reference.
    pub fn passed_by_reference(&self) -> bool {
        self.passed_by_reference
    }

    /// Type name in the secondary target language.
    pub fn secondary_type(&self) -> &str {
        &self.secondary_type
    }

    /// Secondary-language type name where a reference type is required.
    pub fn secondary_reference_type(&self) -> &str {
        &self.secondary_reference_type
    }

    /// Type name used in the serialized schema.
    pub fn serialized_type(&self) -> &str {
        &self.serialized_type
    }

    /// Whether the serialized form exposes a direct setter for the field.
    pub fn has_serializer_setter(&self) -> bool {
        self.has_serializer_setter
    }

    /// Primary type name qualified with its enclosing scope, if any.
    pub fn scoped_primary_type(&self) -> &str {
        &self.scoped_primary_type
    }

    /// Default expression in the secondary language.
    pub fn secondary_default(&self) -> Option<&str> {
        self.secondary_default.as_deref()
    }

    /// Default expression in the primary language.
    ///
    /// `None` means the primary language's implicit default applies.
    pub fn primary_default(&self) -> Option<&str> {
        self.primary_default.as_deref()
    }

    /// Whether serialization skips the field when it holds its default.
    pub fn omit_if_default(&self) -> bool {
        self.omit_if_default
    }

    /// Whether the serialized representation differs from the primary one.
    pub fn has_representation_change(&self) -> bool {
        self.serialized_type != self.primary_type
    }
}

/// Every recognized [`ScalarType`] option, each one optional.
///
/// This is the deserializable form used by configuration files. Unknown
/// option names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarTypeOptions {
    pub primary_type: Option<String>,
    pub is_enum: Option<bool>,
    pub passed_by_reference: Option<bool>,
    pub secondary_type: Option<String>,
    pub secondary_reference_type: Option<String>,
    pub serialized_type: Option<String>,
    pub has_serializer_setter: Option<bool>,
    pub scoped_primary_type: Option<String>,
    pub secondary_default: Option<String>,
    pub primary_default: Option<String>,
    pub omit_if_default: Option<bool>,
}

impl ScalarTypeOptions {
    /// Resolve defaults and produce the descriptor.
    ///
    /// Fails with [`Error::MissingPrimaryType`] when `primary_type` is unset,
    /// empty or whitespace only.
    pub fn build(self) -> Result<ScalarType> {
        let primary_type = self
            .primary_type
            .filter(|ty| !ty.trim().is_empty())
            .ok_or(Error::MissingPrimaryType)?;

        let secondary_type = self
            .secondary_type
            .unwrap_or_else(|| primary_type.clone());
        let secondary_reference_type = self
            .secondary_reference_type
            .unwrap_or_else(|| secondary_type.clone());

        // Same-representation fields always support direct setting.
        let (serialized_type, has_serializer_setter) = match self.serialized_type {
            Some(serialized) => {
                let same = serialized == primary_type;
                (serialized, self.has_serializer_setter.unwrap_or(same))
            }
            None => (primary_type.clone(), true),
        };

        let scoped_primary_type = self
            .scoped_primary_type
            .unwrap_or_else(|| primary_type.clone());

        Ok(ScalarType {
            is_enum: self.is_enum.unwrap_or(false),
            passed_by_reference: self.passed_by_reference.unwrap_or(false),
            secondary_type,
            secondary_reference_type,
            serialized_type,
            has_serializer_setter,
            scoped_primary_type,
            secondary_default: self.secondary_default,
            primary_default: self.primary_default,
            omit_if_default: self.omit_if_default.unwrap_or(false),
            primary_type,
        })
    }
}

/// Fluent builder for [`ScalarType`].
#[derive(Debug, Clone, Default)]
pub struct ScalarTypeBuilder {
    options: ScalarTypeOptions,
}

impl ScalarTypeBuilder {
    /// Create a builder for `primary_type`.
    pub fn new(primary_type: impl Into<String>) -> Self {
        Self {
            options: ScalarTypeOptions {
                primary_type: Some(primary_type.into()),
                ..Default::default()
            },
        }
    }

    /// Mark the type as an enum persisted as an integer.
    pub fn is_enum(mut self, is_enum: bool) -> Self {
        self.options.is_enum = Some(is_enum);
        self
    }

    /// Pass the type by reference rather than by value.
    pub fn passed_by_reference(mut self, by_reference: bool) -> Self {
        self.options.passed_by_reference = Some(by_reference);
        self
    }

    /// Set the secondary-language type name.
    pub fn secondary_type(mut self, ty: impl Into<String>) -> Self {
        self.options.secondary_type = Some(ty.into());
        self
    }

    /// Set the secondary-language reference type name.
    pub fn secondary_reference_type(mut self, ty: impl Into<String>) -> Self {
        self.options.secondary_reference_type = Some(ty.into());
        self
    }

    /// Set the serialized schema type name.
    pub fn serialized_type(mut self, ty: impl Into<String>) -> Self {
        self.options.serialized_type = Some(ty.into());
        self
    }

    /// Override whether the serialized form has a direct setter.
    ///
    /// Only takes effect together with [`serialized_type`](Self::serialized_type).
    pub fn has_serializer_setter(mut self, has_setter: bool) -> Self {
        self.options.has_serializer_setter = Some(has_setter);
        self
    }

    /// Set the scope-qualified primary type name.
    pub fn scoped_primary_type(mut self, ty: impl Into<String>) -> Self {
        self.options.scoped_primary_type = Some(ty.into());
        self
    }

    /// Set the secondary-language default expression.
    pub fn secondary_default(mut self, value: impl Into<String>) -> Self {
        self.options.secondary_default = Some(value.into());
        self
    }

    /// Set the primary-language default expression.
    pub fn primary_default(mut self, value: impl Into<String>) -> Self {
        self.options.primary_default = Some(value.into());
        self
    }

    /// Skip the field during serialization when it holds its default.
    pub fn omit_if_default(mut self, omit: bool) -> Self {
        self.options.omit_if_default = Some(omit);
        self
    }

    /// Resolve defaults and produce the descriptor.
    pub fn build(self) -> Result<ScalarType> {
        self.options.build()
    }
}

impl From<ScalarTypeOptions> for ScalarTypeBuilder {
    fn from(options: ScalarTypeOptions) -> Self {
        Self { options }
    }
}
