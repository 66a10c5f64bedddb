use crate::TypeRef;
use crate::ast;
use indexmap::IndexMap;
use thiserror::Error;

/// A single field declared on an object type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_ref: TypeRef,
}

impl FieldDescriptor {
    fn from_ast_field(field: &ast::schema::Field) -> Self {
        Self {
            name: field.name.to_owned(),
            type_ref: TypeRef::from_ast_type(&field.field_type),
        }
    }
}

/// Which operation root a root field was declared under.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq,
    serde::Deserialize, serde::Serialize,
)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// The name of the root container type this kind's operations live on.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

impl std::fmt::Display for OperationKind {
    /// Renders the GraphQL operation keyword (`query` / `mutation`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

impl std::str::FromStr for OperationKind {
    type Err = OperationKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            other => Err(OperationKindParseError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error)]
#[error("Expected `query` or `mutation`, found `{0}`")]
pub struct OperationKindParseError(String);

/// One callable root field declared under `Query` or `Mutation`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    pub name: String,

    /// Declared arguments in declaration order.
    pub arguments: Vec<(String, TypeRef)>,

    pub return_type: TypeRef,
}

impl OperationDescriptor {
    fn from_ast_field(kind: OperationKind, field: &ast::schema::Field) -> Self {
        Self {
            kind,
            name: field.name.to_owned(),
            arguments: field.arguments.iter()
                .map(|arg| (
                    arg.name.to_owned(),
                    TypeRef::from_ast_type(&arg.value_type),
                ))
                .collect(),
            return_type: TypeRef::from_ast_type(&field.field_type),
        }
    }
}

/// An index of every non-root object type in a schema, keyed by type name,
/// mapping to the type's fields in declaration order.
///
/// A type name that resolves through the catalog is eligible for further
/// selection; a name absent from the catalog (scalar, enum, interface,
/// union, input object) is treated as a terminal leaf downstream.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeCatalog {
    types: IndexMap<String, Vec<FieldDescriptor>>,
}

impl TypeCatalog {
    /// Walk a parsed schema document and split it into the flat list of
    /// operation descriptors (root fields of `Query`/`Mutation`, which are
    /// excluded from the catalog itself) and the catalog of all other
    /// object types.
    ///
    /// Schemas with no `Query` or `Mutation` type produce an empty
    /// operations list; that is not an error. Duplicate type definitions
    /// follow plain map-insertion semantics: the last one wins.
    pub fn from_document(
        doc: &ast::schema::Document,
    ) -> (Vec<OperationDescriptor>, TypeCatalog) {
        let mut operations = vec![];
        let mut types = IndexMap::new();

        for def in &doc.definitions {
            let ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Object(obj),
            ) = def else {
                continue;
            };

            match obj.name.as_str() {
                "Query" => operations.extend(
                    obj.fields.iter().map(|field| {
                        OperationDescriptor::from_ast_field(
                            OperationKind::Query,
                            field,
                        )
                    })
                ),

                "Mutation" => operations.extend(
                    obj.fields.iter().map(|field| {
                        OperationDescriptor::from_ast_field(
                            OperationKind::Mutation,
                            field,
                        )
                    })
                ),

                _ => {
                    types.insert(
                        obj.name.to_owned(),
                        obj.fields.iter()
                            .map(FieldDescriptor::from_ast_field)
                            .collect(),
                    );
                },
            }
        }

        (operations, TypeCatalog { types })
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The fields of `type_name`, or `None` for a name the catalog treats
    /// as terminal.
    pub fn fields(&self, type_name: &str) -> Option<&[FieldDescriptor]> {
        self.types.get(type_name).map(Vec::as_slice)
    }

    /// Catalogued type names in schema declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
