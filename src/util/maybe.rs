use serde::{Deserialize, Serialize};

/// A field of a partial-update payload.
///
/// Unlike `Option`, this distinguishes "key not present in the JSON body"
/// from "key present". Nullable columns nest an `Option` inside
/// (`MaybeAbsent<Option<String>>`), so an explicit `null` arrives as
/// `Present(None)` and clears the column, while a missing key stays
/// `Absent` and leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MaybeAbsent<T> {
    Present(T),
    #[serde(skip_serializing)]
    Absent,
}

impl<T> Default for MaybeAbsent<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> MaybeAbsent<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn get(&self) -> &T {
        match self {
            MaybeAbsent::Present(v) => v,
            MaybeAbsent::Absent => panic!("Value is absent!"),
        }
    }

    pub fn if_present<'a, F>(&'a self, f: F)
    where
        F: FnOnce(&'a T),
    {
        if let MaybeAbsent::Present(v) = self {
            f(v);
        }
    }
}
