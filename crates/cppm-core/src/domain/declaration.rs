//! Declaration model built up from interactive prompts.
//!
//! Values here live for exactly one round of the edit session: they are
//! filled in from user input, rendered once and dropped.

use std::fmt;

use crate::domain::error::DomainError;

/// An ordered `(name, type)` pair, used for parameters and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Parse a `name type` line.
    ///
    /// The name is the first whitespace-delimited token; the type is the
    /// rest of the line with surrounding whitespace trimmed, so multi-word
    /// types such as `unsigned int` survive intact.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let trimmed = line.trim();
        let malformed = || DomainError::MalformedField {
            input: trimmed.to_string(),
        };

        let (name, ty) = trimmed.split_once(char::is_whitespace).ok_or_else(malformed)?;
        let ty = ty.trim();
        if name.is_empty() || ty.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(name, ty))
    }
}

/// A free function or a method, depending on `nested`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub return_type: String,
    pub parameters: Vec<Field>,
    /// Set for methods collected inside a class/struct; adds one indentation level.
    pub nested: bool,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, nested: bool) -> Self {
        Self {
            name: name.into(),
            nested,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Field>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Keyword of a user-defined type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
}

impl TypeKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A class or struct with attributes and nested methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub description: String,
    pub attributes: Vec<Field>,
    pub(crate) methods: Vec<FunctionDeclaration>,
}

impl TypeDeclaration {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: String::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Field>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append a method. Methods are always rendered nested.
    pub fn add_method(&mut self, mut method: FunctionDeclaration) {
        method.nested = true;
        self.methods.push(method);
    }

    pub fn methods(&self) -> &[FunctionDeclaration] {
        &self.methods
    }
}

/// Classification of a top-level session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationHeader {
    Quit,
    Type { kind: TypeKind, name: String },
    Function { name: String },
}

impl DeclarationHeader {
    pub const QUIT: &'static str = "quit";

    /// Classify a header line such as `class Point` or `function add`.
    ///
    /// The keyword must be the whole first token: `classic Foo` is not a
    /// class. Names are otherwise taken verbatim.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let trimmed = line.trim();
        if trimmed == Self::QUIT {
            return Ok(Self::Quit);
        }

        let (keyword, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let name = rest.trim();

        // `None` is a free function.
        let kind = match keyword {
            "class" => Some(TypeKind::Class),
            "struct" => Some(TypeKind::Struct),
            "function" => None,
            _ => {
                return Err(DomainError::UnrecognizedDeclaration {
                    input: trimmed.to_string(),
                });
            }
        };
        if name.is_empty() {
            return Err(DomainError::MissingName {
                keyword: kind.map_or("function", TypeKind::keyword),
            });
        }

        let name = name.to_string();
        Ok(match kind {
            Some(kind) => Self::Type { kind, name },
            None => Self::Function { name },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_splits_name_then_type() {
        assert_eq!(Field::parse("a int").unwrap(), Field::new("a", "int"));
    }

    #[test]
    fn field_keeps_inner_whitespace_of_type() {
        let field = Field::parse("  count   unsigned long  ").unwrap();
        assert_eq!(field.name, "count");
        assert_eq!(field.ty, "unsigned long");
    }

    #[test]
    fn field_without_delimiter_is_malformed() {
        assert!(matches!(
            Field::parse("lonely"),
            Err(DomainError::MalformedField { .. })
        ));
        assert!(Field::parse("name   ").is_err());
    }

    #[test]
    fn quit_is_exact() {
        assert_eq!(DeclarationHeader::parse("quit").unwrap(), DeclarationHeader::Quit);
        assert_eq!(DeclarationHeader::parse(" quit \n").unwrap(), DeclarationHeader::Quit);
        assert!(DeclarationHeader::parse("quit now").is_err());
    }

    #[test]
    fn class_and_struct_headers() {
        assert_eq!(
            DeclarationHeader::parse("class Point").unwrap(),
            DeclarationHeader::Type {
                kind: TypeKind::Class,
                name: "Point".into()
            }
        );
        assert_eq!(
            DeclarationHeader::parse("struct  Pair").unwrap(),
            DeclarationHeader::Type {
                kind: TypeKind::Struct,
                name: "Pair".into()
            }
        );
    }

    #[test]
    fn function_header_takes_remainder_as_name() {
        assert_eq!(
            DeclarationHeader::parse("function add").unwrap(),
            DeclarationHeader::Function { name: "add".into() }
        );
    }

    #[test]
    fn keyword_must_be_a_whole_token() {
        assert!(matches!(
            DeclarationHeader::parse("classic Foo"),
            Err(DomainError::UnrecognizedDeclaration { .. })
        ));
        assert!(matches!(
            DeclarationHeader::parse("enum Color"),
            Err(DomainError::UnrecognizedDeclaration { .. })
        ));
        assert!(DeclarationHeader::parse("").is_err());
    }

    #[test]
    fn keyword_without_name_is_rejected() {
        assert_eq!(
            DeclarationHeader::parse("struct"),
            Err(DomainError::MissingName { keyword: "struct" })
        );
    }

    #[test]
    fn add_method_forces_nesting() {
        let mut ty = TypeDeclaration::new(TypeKind::Class, "Point");
        ty.add_method(FunctionDeclaration::new("norm", false));
        assert!(ty.methods()[0].nested);
    }
}
