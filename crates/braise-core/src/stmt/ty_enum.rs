/// An enumerated type whose variants are backed by integer discriminants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeEnum {
    /// Name of the enumerated type
    pub name: String,

    /// Variants in declaration order
    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumVariant {
    pub name: String,
    pub discriminant: i64,
}

impl TypeEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: vec![],
        }
    }

    /// Adds a variant, returning the updated type.
    pub fn variant(mut self, name: impl Into<String>, discriminant: i64) -> Self {
        self.variants.push(EnumVariant {
            name: name.into(),
            discriminant,
        });
        self
    }

    pub fn by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }

    /// Looks a variant up by name, ignoring ASCII case.
    pub fn by_name(&self, name: &str) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.name.eq_ignore_ascii_case(name))
    }
}
