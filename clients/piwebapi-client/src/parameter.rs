// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Conversion of path and query arguments to their wire text

use piwebapi_api::{SearchMode, SearchOperator, SortOrder, WebIdType};

/// Text form of a value as the service expects it in paths and queries
///
/// Booleans are lowercase, numbers are plain decimal, enums use the
/// service's names (`IDOnly`, `Descending`, ...).
pub trait ToParameter {
    fn to_parameter(&self) -> String;
}

impl ToParameter for str {
    fn to_parameter(&self) -> String {
        self.to_owned()
    }
}

impl ToParameter for String {
    fn to_parameter(&self) -> String {
        self.clone()
    }
}

impl<T: ToParameter + ?Sized> ToParameter for &T {
    fn to_parameter(&self) -> String {
        (**self).to_parameter()
    }
}

macro_rules! display_parameter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParameter for $ty {
                fn to_parameter(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_parameter!(
    bool,
    i32,
    i64,
    u32,
    u64,
    usize,
    WebIdType,
    SortOrder,
    SearchMode,
    SearchOperator,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_parameters() {
        assert_eq!(true.to_parameter(), "true");
        assert_eq!(false.to_parameter(), "false");
        assert_eq!(1000i32.to_parameter(), "1000");
        assert_eq!("Boiler*".to_parameter(), "Boiler*");
    }

    #[test]
    fn test_enum_parameters() {
        assert_eq!(WebIdType::IdOnly.to_parameter(), "IDOnly");
        assert_eq!(SortOrder::Descending.to_parameter(), "Descending");
        assert_eq!(SearchMode::BackwardFromEndTime.to_parameter(), "BackwardFromEndTime");
    }
}
