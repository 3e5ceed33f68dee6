//! Snapshot tests for files assembled from catalog descriptors.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use treegen_codegen::CodeBuilder;
use treegen_core::ScalarType;
use treegen_manifest::ScalarCatalog;

const SCALARS: &str = r#"
[scalars.bool]
primary_type = "bool"
primary_default = "false"

[scalars.id_string]
primary_type = "IdString"
passed_by_reference = true
serialized_type = "string"
has_serializer_setter = true

[enums.JoinType]
scope = "ASTJoin"
default = "DEFAULT_JOIN_TYPE"
"#;

/// (field name, scalar name, comment)
const JOIN_FIELDS: &[(&str, &str, &str)] = &[
    (
        "natural",
        "bool",
        "
        True if this is a NATURAL join.
        ",
    ),
    (
        "alias",
        "id_string",
        "
        Optional alias for the joined table.

        Empty when no alias was written.
        ",
    ),
    ("join_type", "JoinType", ""),
];

fn catalog() -> ScalarCatalog {
    ScalarCatalog::from_str(SCALARS).expect("Failed to parse catalog")
}

fn param_type(ty: &ScalarType) -> String {
    if ty.passed_by_reference() {
        format!("const {}&", ty.scoped_primary_type())
    } else {
        ty.scoped_primary_type().to_string()
    }
}

fn render_header(catalog: &ScalarCatalog) -> String {
    let mut builder = CodeBuilder::default();
    builder
        .push_line("class ASTJoin final : public ASTTableExpression {")
        .push_line(" public:")
        .push_indent();

    for (name, scalar, comment) in JOIN_FIELDS {
        let ty = catalog.get(scalar).expect("scalar not declared");
        let param = param_type(ty);
        builder
            .push_comment("// ", comment)
            .push_line(&format!("{} {}() const {{ return {}_; }}", param, name, name))
            .push_line(&format!(
                "void set_{}({} value) {{ {}_ = value; }}",
                name, param, name
            ))
            .push_blank();
    }

    builder.push_blank().push_dedent().push_line(" private:").push_indent();

    for (name, scalar, _) in JOIN_FIELDS {
        let ty = catalog.get(scalar).expect("scalar not declared");
        let line = match ty.primary_default() {
            Some(default) => format!("{} {}_ = {};", ty.scoped_primary_type(), name, default),
            None => format!("{} {}_;", ty.scoped_primary_type(), name),
        };
        builder.push_line(&line);
    }

    builder.push_dedent().push_line("};");
    builder.build()
}

fn render_schema(catalog: &ScalarCatalog) -> String {
    CodeBuilder::default()
        .comment(
            "// ",
            "
            Serialized form of ASTJoin.
            ",
        )
        .block_with_close("message ASTJoinProto {", "}", |b| {
            b.each(JOIN_FIELDS.iter().enumerate(), |b, (i, (name, scalar, _))| {
                let ty = catalog.get(scalar).expect("scalar not declared");
                b.line(&format!(
                    "optional {} {} = {};",
                    ty.serialized_type(),
                    name,
                    i + 1
                ))
            })
        })
        .build()
}

#[test]
fn test_join_header() {
    let header = render_header(&catalog());
    insta::assert_snapshot!("join_header", header);
}

#[test]
fn test_join_schema() {
    let schema = render_schema(&catalog());
    insta::assert_snapshot!("join_schema", schema);
}

#[test]
fn test_rendered_files_are_compact() {
    let catalog = catalog();
    for file in [render_header(&catalog), render_schema(&catalog)] {
        assert!(!file.contains("\n\n\n"));
        assert!(!file.lines().any(|line| line.ends_with(' ')));
    }
}
