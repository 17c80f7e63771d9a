//! Subslide range specs and visibility.
//!
//! A spec string is a comma-separated list of segments, each one of:
//!
//! | Segment | Meaning                |
//! |---------|------------------------|
//! | `N`     | exactly subslide N     |
//! | `-N`    | subslides 1 through N  |
//! | `N-`    | subslide N and later   |
//! | `N-M`   | subslides N through M  |
//!
//! Segments are OR'd together, so `"-2,4,6-8,10-"` shows content on
//! subslides 1, 2, 4, 6, 7, 8, and from 10 on.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::Value;

/// One visibility predicate over subslide indices (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSpec {
    /// Exactly one subslide.
    Exact(u32),
    /// An inclusive range; a missing bound is open.
    Range { lo: Option<u32>, hi: Option<u32> },
}

impl RangeSpec {
    /// Subslide `lo` and every later one.
    pub fn from(lo: u32) -> Self {
        RangeSpec::Range {
            lo: Some(lo),
            hi: None,
        }
    }

    /// Subslides 1 through `hi`.
    pub fn until(hi: u32) -> Self {
        RangeSpec::Range {
            lo: None,
            hi: Some(hi),
        }
    }

    /// Subslides `lo` through `hi`, inclusive.
    pub fn between(lo: u32, hi: u32) -> Self {
        RangeSpec::Range {
            lo: Some(lo),
            hi: Some(hi),
        }
    }

    pub fn contains(&self, index: u32) -> bool {
        match *self {
            RangeSpec::Exact(n) => index == n,
            RangeSpec::Range { lo, hi } => {
                lo.is_none_or(|lo| index >= lo) && hi.is_none_or(|hi| index <= hi)
            }
        }
    }

    /// The largest finite bound this predicate references.
    pub fn max_bound(&self) -> u32 {
        match *self {
            RangeSpec::Exact(n) => n,
            RangeSpec::Range { hi: Some(hi), .. } => hi,
            RangeSpec::Range { lo: Some(lo), .. } => lo,
            RangeSpec::Range { lo: None, hi: None } => 1,
        }
    }

    /// Parse a single trimmed segment.
    fn parse_segment(segment: &str) -> Option<RangeSpec> {
        let number = |s: &str| -> Option<u32> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse::<u32>().ok()
        };

        // Priority: exact, until, from, inclusive range.
        if let Some(n) = number(segment) {
            return Some(RangeSpec::Exact(n));
        }
        if let Some(rest) = segment.strip_prefix('-') {
            return number(rest).map(RangeSpec::until);
        }
        if let Some(rest) = segment.strip_suffix('-') {
            if let Some(n) = number(rest) {
                return Some(RangeSpec::from(n));
            }
        }
        let (lo, hi) = segment.split_once('-')?;
        let (lo, hi) = (number(lo)?, number(hi)?);
        if lo > hi {
            warn!(segment, "subslide range is inverted and never matches");
        }
        Some(RangeSpec::between(lo, hi))
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RangeSpec::Exact(n) => write!(f, "{n}"),
            RangeSpec::Range { lo, hi } => {
                if let Some(lo) = lo {
                    write!(f, "{lo}")?;
                }
                f.write_str("-")?;
                if let Some(hi) = hi {
                    write!(f, "{hi}")?;
                }
                Ok(())
            }
        }
    }
}

/// A full visibility predicate: the OR of its range specs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Visibility {
    specs: Vec<RangeSpec>,
}

impl Visibility {
    pub fn new(specs: Vec<RangeSpec>) -> Self {
        Self { specs }
    }

    /// Parse a spec string such as `"-2,4,6-8,10-"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unveil::reveal::Visibility;
    ///
    /// let spec = Visibility::parse("-2,4,6-8,10-").unwrap();
    /// assert!(!spec.is_visible(3));
    /// assert!(spec.is_visible(7));
    /// assert!(spec.is_visible(11));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        s.split(',')
            .map(|segment| {
                let segment = segment.trim();
                RangeSpec::parse_segment(segment).ok_or_else(|| Error::Parse {
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn specs(&self) -> &[RangeSpec] {
        &self.specs
    }

    /// True if any range spec contains `index`.
    pub fn is_visible(&self, index: u32) -> bool {
        self.specs.iter().any(|spec| spec.contains(index))
    }

    /// The number of subslides needed to show every state this predicate
    /// distinguishes: its largest finite bound, and never less than 1.
    pub fn max_required_index(&self) -> u32 {
        self.specs
            .iter()
            .map(RangeSpec::max_bound)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    fn extend(&mut self, other: Visibility) {
        self.specs.extend(other.specs);
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Visibility::parse(s)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}

/// Anything usable as a visibility predicate.
///
/// Integers select one subslide, strings are parsed, lists are OR'd
/// recursively, and dynamic [`Value`]s accept any of those shapes.
pub trait IntoVisibility {
    fn into_visibility(self) -> Result<Visibility>;
}

impl IntoVisibility for Visibility {
    fn into_visibility(self) -> Result<Visibility> {
        Ok(self)
    }
}

impl IntoVisibility for &Visibility {
    fn into_visibility(self) -> Result<Visibility> {
        Ok(self.clone())
    }
}

impl IntoVisibility for RangeSpec {
    fn into_visibility(self) -> Result<Visibility> {
        Ok(Visibility::new(vec![self]))
    }
}

impl IntoVisibility for u32 {
    fn into_visibility(self) -> Result<Visibility> {
        if self == 0 {
            return Err(Error::InvalidSpec("subslide indices start at 1".into()));
        }
        Ok(Visibility::new(vec![RangeSpec::Exact(self)]))
    }
}

impl IntoVisibility for &str {
    fn into_visibility(self) -> Result<Visibility> {
        Visibility::parse(self)
    }
}

impl IntoVisibility for String {
    fn into_visibility(self) -> Result<Visibility> {
        Visibility::parse(&self)
    }
}

impl<T: IntoVisibility> IntoVisibility for Vec<T> {
    fn into_visibility(self) -> Result<Visibility> {
        let mut all = Visibility::default();
        for item in self {
            all.extend(item.into_visibility()?);
        }
        Ok(all)
    }
}

impl IntoVisibility for &Value {
    fn into_visibility(self) -> Result<Visibility> {
        match self {
            Value::Int(n) => u32::try_from(*n)
                .map_err(|_| Error::InvalidSpec(format!("{n} is not a subslide index")))?
                .into_visibility(),
            Value::Str(s) => Visibility::parse(s),
            Value::Array(items) => items.iter().collect::<Vec<_>>().into_visibility(),
            other => Err(Error::InvalidSpec(format!(
                "expected int, string, or array, found {}",
                other.type_name()
            ))),
        }
    }
}

/// Check whether subslide `index` satisfies `spec`.
pub fn is_visible(index: u32, spec: impl IntoVisibility) -> Result<bool> {
    Ok(spec.into_visibility()?.is_visible(index))
}

/// The number of subslides `spec` requires.
///
/// # Examples
///
/// ```
/// use unveil::reveal::max_required_index;
///
/// assert_eq!(max_required_index("2-5").unwrap(), 5);
/// assert_eq!(max_required_index("3-").unwrap(), 3);
/// ```
pub fn max_required_index(spec: impl IntoVisibility) -> Result<u32> {
    Ok(spec.into_visibility()?.max_required_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_each_form() {
        let spec = Visibility::parse("3, -2 ,4-, 5-7").unwrap();
        assert_eq!(
            spec.specs(),
            &[
                RangeSpec::Exact(3),
                RangeSpec::until(2),
                RangeSpec::from(4),
                RangeSpec::between(5, 7),
            ]
        );
    }

    #[test]
    fn test_parse_errors_name_segment() {
        for bad in ["", "1,,2", "a", "1-2-3", "--1", "4 5", "+3", "99999999999"] {
            match Visibility::parse(bad) {
                Err(Error::Parse { .. }) => {}
                other => panic!("expected parse error for {bad:?}, got {other:?}"),
            }
        }
        match Visibility::parse("1, x-2") {
            Err(Error::Parse { segment }) => assert_eq!(segment, "x-2"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_zero_bounds_parse() {
        for nothing in ["0", "-0"] {
            let spec = Visibility::parse(nothing).unwrap();
            assert!((1..20).all(|i| !spec.is_visible(i)), "{nothing:?} matched");
            assert_eq!(spec.max_required_index(), 1);
        }

        let from_zero = Visibility::parse("0-3").unwrap();
        let until = Visibility::parse("-3").unwrap();
        assert!((1..20).all(|i| from_zero.is_visible(i) == until.is_visible(i)));
        assert_eq!(from_zero.max_required_index(), 3);

        let all = Visibility::parse("0-").unwrap();
        assert!((1..20).all(|i| all.is_visible(i)));
        assert_eq!(all.max_required_index(), 1);

        let inverted = Visibility::parse("2-0").unwrap();
        assert!((1..20).all(|i| !inverted.is_visible(i)));
        assert_eq!(inverted.max_required_index(), 1);
    }

    #[test]
    fn test_visibility_examples() {
        let spec = "-2,4,6-8,10-";
        assert!(!is_visible(3, spec).unwrap());
        assert!(is_visible(7, spec).unwrap());
        assert!(is_visible(11, spec).unwrap());
        assert!(is_visible(1, spec).unwrap());
        assert!(!is_visible(9, spec).unwrap());
    }

    #[test]
    fn test_max_required_index() {
        assert_eq!(max_required_index("2-5").unwrap(), 5);
        assert_eq!(max_required_index("3-").unwrap(), 3);
        assert_eq!(max_required_index("-4").unwrap(), 4);
        assert_eq!(max_required_index("1,7,3-").unwrap(), 7);
        assert_eq!(max_required_index(Vec::<u32>::new()).unwrap(), 1);
    }

    #[test]
    fn test_inverted_range_never_matches() {
        let spec = Visibility::parse("5-3").unwrap();
        assert!((1..10).all(|i| !spec.is_visible(i)));
        assert_eq!(spec.max_required_index(), 3);
    }

    #[test]
    fn test_lists_are_ored() {
        let spec = vec![
            Visibility::parse("1").unwrap(),
            Visibility::new(vec![RangeSpec::from(4)]),
        ];
        assert!(is_visible(1, spec.clone()).unwrap());
        assert!(!is_visible(2, spec.clone()).unwrap());
        assert!(is_visible(9, spec).unwrap());
    }

    #[test]
    fn test_integer_specs() {
        assert!(is_visible(2, 2u32).unwrap());
        assert!(!is_visible(3, 2u32).unwrap());
        assert!(matches!(is_visible(1, 0u32), Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn test_value_specs() {
        let v = Value::Array(vec![Value::Int(2), Value::Str("5-".into())]);
        assert!(is_visible(2, &v).unwrap());
        assert!(is_visible(6, &v).unwrap());
        assert!(!is_visible(3, &v).unwrap());

        assert!(matches!(
            is_visible(1, &Value::Bool(true)),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            is_visible(1, &Value::Int(-1)),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            is_visible(1, &Value::Str("x".into())),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let spec = Visibility::parse("-2,4,6-8,10-").unwrap();
        assert_eq!(spec.to_string(), "-2,4,6-8,10-");
    }

    proptest! {
        #[test]
        fn prop_order_does_not_matter(
            specs in prop::collection::vec(
                prop_oneof![
                    (1u32..20).prop_map(RangeSpec::Exact),
                    (1u32..20).prop_map(RangeSpec::from),
                    (1u32..20).prop_map(RangeSpec::until),
                    (1u32..20, 0u32..10).prop_map(|(lo, d)| RangeSpec::between(lo, lo + d)),
                ],
                1..6
            ),
            index in 1u32..30
        ) {
            let forward = Visibility::new(specs.clone());
            let mut reversed = specs;
            reversed.reverse();
            let backward = Visibility::new(reversed);
            prop_assert_eq!(forward.is_visible(index), backward.is_visible(index));
        }

        #[test]
        fn prop_display_parses_back(
            specs in prop::collection::vec(
                prop_oneof![
                    (1u32..50).prop_map(RangeSpec::Exact),
                    (1u32..50).prop_map(RangeSpec::from),
                    (1u32..50).prop_map(RangeSpec::until),
                    (1u32..50, 0u32..10).prop_map(|(lo, d)| RangeSpec::between(lo, lo + d)),
                ],
                1..6
            )
        ) {
            let spec = Visibility::new(specs);
            let reparsed = Visibility::parse(&spec.to_string()).unwrap();
            prop_assert_eq!(reparsed, spec);
        }

        #[test]
        fn prop_nothing_visible_past_bounded_max(
            n in 1u32..40, m in 1u32..40, index in 1u32..100
        ) {
            let spec = Visibility::new(vec![RangeSpec::Exact(n), RangeSpec::until(m)]);
            if index > spec.max_required_index() {
                prop_assert!(!spec.is_visible(index));
            }
        }
    }
}
