use std::fmt;

use serde::{Deserialize, Serialize};

/// Classifies expense activity for aggregation and reporting. The set is
/// fixed; anything unclassified falls under `Others`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Internet,
    Clothing,
    Medicine,
    Entertainment,
    Others,
}

impl Category {
    /// Every category in its canonical enumeration order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Internet,
        Category::Clothing,
        Category::Medicine,
        Category::Entertainment,
        Category::Others,
    ];

    /// Deterministic display color used by breakdown charts.
    pub fn color(self) -> &'static str {
        match self {
            Category::Food => "#F59E0B",
            Category::Internet => "#3B82F6",
            Category::Clothing => "#EC4899",
            Category::Medicine => "#10B981",
            Category::Entertainment => "#8B5CF6",
            Category::Others => "#6B7280",
        }
    }

    /// Canonical lowercase tag, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Internet => "internet",
            Category::Clothing => "clothing",
            Category::Medicine => "medicine",
            Category::Entertainment => "entertainment",
            Category::Others => "others",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
