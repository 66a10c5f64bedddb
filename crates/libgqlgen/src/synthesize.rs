use crate::catalog::FieldDescriptor;
use crate::catalog::OperationDescriptor;
use crate::catalog::TypeCatalog;
use std::fmt::Write;

/// Default bound on how many nested object hops a selection may take.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Builds the textual field-selection tree for one operation.
///
/// Selection expands every field of the operation's return type,
/// recursively, as long as the field's bare type name resolves through the
/// catalog and the current depth is strictly below `max_depth`. The depth
/// bound is the only guard against self-referential types; no type-identity
/// tracking is performed, so a recursive type is simply truncated once the
/// bound is reached.
///
/// Truncation silently emits the object-typed field with no sub-selection.
/// The resulting document can violate strict GraphQL grammar (an empty
/// selection block when an empty object type is reached at depth zero);
/// the formatter rejects those documents downstream.
pub struct SelectionSynthesizer<'cat> {
    catalog: &'cat TypeCatalog,
    max_depth: usize,
}

impl<'cat> SelectionSynthesizer<'cat> {
    pub fn new(catalog: &'cat TypeCatalog) -> Self {
        Self::with_max_depth(catalog, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(catalog: &'cat TypeCatalog, max_depth: usize) -> Self {
        Self { catalog, max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render the raw query document for `op`.
    pub fn synthesize(&self, op: &OperationDescriptor) -> String {
        let mut out = String::new();

        // Operation header, with a variable declaration per argument.
        let _ = write!(out, "{} {}", op.kind, pascal_case(&op.name));
        if !op.arguments.is_empty() {
            let decls = op.arguments.iter()
                .map(|(name, type_ref)| format!("${name}: {type_ref}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, "({decls})");
        }
        out.push_str(" {\n");

        // Root field, binding each declared variable back to its argument.
        let _ = write!(out, "  {}", op.name);
        if !op.arguments.is_empty() {
            let bindings = op.arguments.iter()
                .map(|(name, _)| format!("{name}: ${name}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, "({bindings})");
        }

        match self.catalog.fields(op.return_type.bare_name()) {
            Some(fields) => {
                out.push_str(" {\n");
                for field in fields {
                    self.select_field(&mut out, field, /* depth = */ 0, 2);
                }
                out.push_str("  }\n");
            },

            // Scalar/leaf return type: no sub-selection.
            None => out.push('\n'),
        }

        out.push_str("}\n");
        out
    }

    fn select_field(
        &self,
        out: &mut String,
        field: &FieldDescriptor,
        depth: usize,
        indent_level: usize,
    ) {
        let indent = "  ".repeat(indent_level);

        match self.catalog.fields(field.type_ref.bare_name()) {
            Some(sub_fields) if depth < self.max_depth => {
                let _ = writeln!(out, "{indent}{} {{", field.name);
                for sub_field in sub_fields {
                    self.select_field(out, sub_field, depth + 1, indent_level + 1);
                }
                let _ = writeln!(out, "{indent}}}");
            },

            // Leaf type, or an object-typed field truncated at the depth
            // bound: the field name stands alone.
            _ => {
                let _ = writeln!(out, "{indent}{}", field.name);
            },
        }
    }
}

/// Uppercase only the first character of `name`, leaving the rest as-is.
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
