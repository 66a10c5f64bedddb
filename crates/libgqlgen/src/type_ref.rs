use crate::ast;

/// A reference to a schema type: a bare name plus any combination of list
/// and non-null wrappers, mirroring GraphQL's wrapping-type grammar.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// The innermost type name with all wrappers stripped.
    ///
    /// This is the name used to decide whether a field is eligible for
    /// further selection (present in the catalog) or terminal (absent).
    pub fn bare_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.bare_name(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::NamedType(name) =>
                Self::Named(name.to_owned()),

            ast::schema::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast_type(inner))),

            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }
}

impl std::fmt::Display for TypeRef {
    /// Renders the wrapping syntax exactly as declared, e.g. `[Foo!]!`.
    /// This is the form used in variable-declaration lists.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
