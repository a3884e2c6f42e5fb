//! Display field identities and a table keyed by them.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of text fields shown next to the selection surface.
pub const FIELD_COUNT: usize = 10;

/// One of the text fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
    Hex,
    EngineRed,
    EngineGreen,
    EngineBlue,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::Red,
        FieldId::Green,
        FieldId::Blue,
        FieldId::Hue,
        FieldId::Saturation,
        FieldId::Value,
        FieldId::Hex,
        FieldId::EngineRed,
        FieldId::EngineGreen,
        FieldId::EngineBlue,
    ];

    /// Position of this field in [`FieldId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Label shown in front of the text input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Red => "R:",
            FieldId::Green => "G:",
            FieldId::Blue => "B:",
            FieldId::Hue => "H:",
            FieldId::Saturation => "S:",
            FieldId::Value => "V:",
            FieldId::Hex => "HEX:",
            FieldId::EngineRed => "Unreal R:",
            FieldId::EngineGreen => "Unreal G:",
            FieldId::EngineBlue => "Unreal B:",
        }
    }

    pub fn group(self) -> FieldGroup {
        match self {
            FieldId::Red | FieldId::Green | FieldId::Blue => FieldGroup::Rgb,
            FieldId::Hue | FieldId::Saturation | FieldId::Value => FieldGroup::Hsv,
            FieldId::Hex => FieldGroup::Hex,
            FieldId::EngineRed | FieldId::EngineGreen | FieldId::EngineBlue => FieldGroup::Engine,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches(':'))
    }
}

/// Fields that are parsed together when one of them is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Rgb,
    Hsv,
    Hex,
    Engine,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Rgb,
        FieldGroup::Hsv,
        FieldGroup::Hex,
        FieldGroup::Engine,
    ];

    /// Member fields in display order.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FieldGroup::Rgb => &[FieldId::Red, FieldId::Green, FieldId::Blue],
            FieldGroup::Hsv => &[FieldId::Hue, FieldId::Saturation, FieldId::Value],
            FieldGroup::Hex => &[FieldId::Hex],
            FieldGroup::Engine => &[
                FieldId::EngineRed,
                FieldId::EngineGreen,
                FieldId::EngineBlue,
            ],
        }
    }
}

/// One value per field, indexed by [`FieldId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldTable<T>([T; FIELD_COUNT]);

impl<T> FieldTable<T> {
    pub fn from_fn(mut f: impl FnMut(FieldId) -> T) -> Self {
        Self(std::array::from_fn(|i| f(FieldId::ALL[i])))
    }

    /// Iterate `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> {
        FieldId::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<FieldId> for FieldTable<T> {
    type Output = T;

    fn index(&self, field: FieldId) -> &T {
        &self.0[field.index()]
    }
}

impl<T> IndexMut<FieldId> for FieldTable<T> {
    fn index_mut(&mut self, field: FieldId) -> &mut T {
        &mut self.0[field.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_display_order() {
        for (i, field) in FieldId::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn groups_partition_all_fields() {
        let mut seen: Vec<FieldId> = FieldGroup::ALL
            .iter()
            .flat_map(|g| g.fields().iter().copied())
            .collect();
        assert_eq!(seen.len(), FIELD_COUNT);
        seen.dedup();
        assert_eq!(seen, FieldId::ALL.to_vec());
        for field in FieldId::ALL {
            assert!(field.group().fields().contains(&field));
        }
    }

    #[test]
    fn table_is_keyed_by_field() {
        let mut table = FieldTable::from_fn(|f| f.label().len());
        assert_eq!(table[FieldId::Hex], 4);
        table[FieldId::Hex] = 0;
        assert_eq!(table.iter().find(|(f, _)| *f == FieldId::Hex).map(|(_, v)| *v), Some(0));
    }

    #[test]
    fn display_drops_label_colon() {
        assert_eq!(FieldId::EngineGreen.to_string(), "Unreal G");
    }
}
