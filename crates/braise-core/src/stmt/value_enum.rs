use super::TypeEnum;

/// A value of an enumerated type.
///
/// Integer discriminants that do not name a declared variant are still valid
/// values; `variant` is `None` for those.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    pub discriminant: i64,
    pub variant: Option<String>,
}

impl ValueEnum {
    pub fn from_discriminant(ty: &TypeEnum, discriminant: i64) -> Self {
        Self {
            discriminant,
            variant: ty
                .by_discriminant(discriminant)
                .map(|variant| variant.name.clone()),
        }
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}
