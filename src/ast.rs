use std::{fmt, ops};

use crate::token::Pos;

/// A parsed `type` declaration: a named aggregate of data fields and
/// body-less method stubs, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    /// Position of the `type` keyword.
    pub pos: Pos,
    pub name: String,
    pub name_pos: Pos,
    pub fields: Vec<Field>,
    pub methods: Vec<FuncDecl>,
}

/// A data member or a function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub var_name: String,
    pub var_pos: Pos,
    pub type_name: String,
    pub type_pos: Pos,
    pub modifiers: Modifiers,
}

/// A method signature. Parameters are order-significant and may repeat types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub pos: Pos,
    pub params: Vec<Field>,
    /// Absent means void.
    pub return_type: Option<ReturnType>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnType {
    pub name: String,
    pub pos: Pos,
}

/// Field modifier bit-set.
///
/// `CONST`, `ARRAY` and `NULLABLE` come from the source text. `PRIMITIVE` is
/// derived by the type checker when the field's type name is one of the
/// built-in primitives.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CONST: Modifiers = Modifiers(1 << 0);
    pub const ARRAY: Modifiers = Modifiers(1 << 1);
    pub const NULLABLE: Modifiers = Modifiers(1 << 2);
    pub const PRIMITIVE: Modifiers = Modifiers(1 << 3);

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (bit, name) in [
            (Modifiers::CONST, "CONST"),
            (Modifiers::ARRAY, "ARRAY"),
            (Modifiers::NULLABLE, "NULLABLE"),
            (Modifiers::PRIMITIVE, "PRIMITIVE"),
        ] {
            if self.contains(bit) {
                set.entry(&name);
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_bits_combine() {
        let mut m = Modifiers::NONE;
        assert!(!m.contains(Modifiers::CONST));

        m |= Modifiers::CONST;
        m |= Modifiers::ARRAY;
        assert!(m.contains(Modifiers::CONST));
        assert!(m.contains(Modifiers::ARRAY));
        assert!(!m.contains(Modifiers::NULLABLE));
        assert!(m.contains(Modifiers::CONST | Modifiers::ARRAY));
        assert!(!m.contains(Modifiers::CONST | Modifiers::NULLABLE));
    }

    #[test]
    fn primitive_bit_is_idempotent() {
        let mut m = Modifiers::PRIMITIVE;
        m |= Modifiers::PRIMITIVE;
        assert_eq!(m, Modifiers::PRIMITIVE);
    }
}
