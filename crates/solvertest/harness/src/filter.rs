//! Name- and tag-based test selection.

use crate::catalog::TestDescriptor;
use crate::error::{HarnessError, Result};
use regex::Regex;
use std::collections::BTreeSet;

/// Decides whether a cataloged test participates in generation at all.
///
/// Name patterns are regular expressions anchored at the start of the test
/// name (prefix match, not full-string match). Checks are applied in a
/// fixed precedence order; the first failing check excludes the test:
///
/// 1. name matches any exclude pattern;
/// 2. an include list exists and the name matches none of it;
/// 3. any tag is in the exclude-tag set;
/// 4. an include-tag set exists and no tag intersects it.
#[derive(Debug, Clone)]
pub struct SelectionFilter {
    include: Option<Vec<Regex>>,
    exclude: Vec<Regex>,
    include_tags: Option<BTreeSet<String>>,
    exclude_tags: BTreeSet<String>,
}

impl SelectionFilter {
    /// Build a filter, compiling the name patterns.
    ///
    /// `None` for `include` / `include_tags` means "no filter of that
    /// kind"; an empty exclude list excludes nothing.
    pub fn new(
        include: Option<&[String]>,
        exclude: &[String],
        include_tags: Option<&[String]>,
        exclude_tags: &[String],
    ) -> Result<Self> {
        Ok(Self {
            include: include.map(compile_anchored).transpose()?,
            exclude: compile_anchored(exclude)?,
            include_tags: include_tags.map(|tags| tags.iter().cloned().collect()),
            exclude_tags: exclude_tags.iter().cloned().collect(),
        })
    }

    /// A filter that selects every cataloged test.
    pub fn all() -> Self {
        Self {
            include: None,
            exclude: Vec::new(),
            include_tags: None,
            exclude_tags: BTreeSet::new(),
        }
    }

    /// Whether the named test should be generated.
    pub fn should_include(&self, name: &str, descriptor: &TestDescriptor) -> bool {
        if self.exclude.iter().any(|pattern| pattern.is_match(name)) {
            return false;
        }

        if let Some(include) = &self.include {
            if !include.iter().any(|pattern| pattern.is_match(name)) {
                return false;
            }
        }

        if descriptor.tags.iter().any(|tag| self.exclude_tags.contains(tag)) {
            return false;
        }

        if let Some(include_tags) = &self.include_tags {
            if !descriptor.tags.iter().any(|tag| include_tags.contains(tag)) {
                return false;
            }
        }

        true
    }
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::all()
    }
}

fn compile_anchored(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| HarnessError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{body, TestCatalog};

    fn descriptor(tags: &[&str]) -> TestDescriptor {
        let mut catalog = TestCatalog::new();
        catalog
            .annotate("test_linear_equality", body(|_| {}))
            .tags(tags.iter().copied());
        catalog.get("test_linear_equality").unwrap().clone()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_filters_include_everything() {
        let filter = SelectionFilter::all();
        assert!(filter.should_include("test_linear_equality", &descriptor(&[])));
    }

    #[test]
    fn test_patterns_anchor_at_the_start() {
        let filter =
            SelectionFilter::new(Some(&strings(&["linear"])), &[], None, &[]).unwrap();
        // "linear" appears in the name but not as a prefix.
        assert!(!filter.should_include("test_linear_equality", &descriptor(&[])));

        let filter =
            SelectionFilter::new(Some(&strings(&["test_lin"])), &[], None, &[]).unwrap();
        assert!(filter.should_include("test_linear_equality", &descriptor(&[])));
    }

    #[test]
    fn test_exclude_beats_include() {
        let filter = SelectionFilter::new(
            Some(&strings(&["test_"])),
            &strings(&["test_linear"]),
            None,
            &[],
        )
        .unwrap();
        assert!(!filter.should_include("test_linear_equality", &descriptor(&[])));
        assert!(filter.should_include("test_quadratic", &descriptor(&[])));
    }

    #[test]
    fn test_tag_exclusion_applies_after_name_checks() {
        let filter =
            SelectionFilter::new(None, &[], None, &strings(&["slow"])).unwrap();
        assert!(!filter.should_include("test_linear_equality", &descriptor(&["slow", "linear"])));
        assert!(filter.should_include("test_linear_equality", &descriptor(&["linear"])));
    }

    #[test]
    fn test_include_tags_require_an_intersection() {
        let filter =
            SelectionFilter::new(None, &[], Some(&strings(&["basic"])), &[]).unwrap();
        assert!(!filter.should_include("test_linear_equality", &descriptor(&["advanced"])));
        assert!(filter.should_include("test_linear_equality", &descriptor(&["basic", "linear"])));
    }

    #[test]
    fn test_include_tags_exclude_untagged_tests() {
        let filter =
            SelectionFilter::new(None, &[], Some(&strings(&["basic"])), &[]).unwrap();
        assert!(!filter.should_include("test_linear_equality", &descriptor(&[])));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = SelectionFilter::new(Some(&strings(&["("])), &[], None, &[]).unwrap_err();
        assert!(err.to_string().contains("Invalid filter pattern"));
    }
}
