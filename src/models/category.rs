//! Transaction category labels
//!
//! Categories are plain strings. The built-in set below drives the pickers and
//! labels; any other non-empty string is accepted as a custom category.

/// A built-in category: stored value and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabel {
    pub value: &'static str,
    pub label: &'static str,
}

/// Built-in categories
pub const DEFAULT_CATEGORIES: &[CategoryLabel] = &[
    CategoryLabel { value: "Food", label: "Food & Dining" },
    CategoryLabel { value: "Transport", label: "Transportation" },
    CategoryLabel { value: "Shopping", label: "Shopping" },
    CategoryLabel { value: "Entertainment", label: "Entertainment" },
    CategoryLabel { value: "Bills", label: "Bills & Utilities" },
    CategoryLabel { value: "Healthcare", label: "Healthcare" },
    CategoryLabel { value: "Education", label: "Education" },
    CategoryLabel { value: "Salary", label: "Salary" },
    CategoryLabel { value: "Freelance", label: "Freelance" },
    CategoryLabel { value: "Other", label: "Other" },
];

/// Display label for a category value; custom categories display as-is
pub fn category_label(value: &str) -> &str {
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label)
        .unwrap_or(value)
}

/// Map user input onto a built-in category value when it names one
/// (case-insensitive, by value or label); otherwise return the trimmed input.
pub fn normalize_category(input: &str) -> String {
    let input = input.trim();
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(input) || c.label.eq_ignore_ascii_case(input))
        .map(|c| c.value.to_string())
        .unwrap_or_else(|| input.to_string())
}
