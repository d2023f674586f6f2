use serde::{Deserialize, Serialize};

/// Search and filter criteria shared by the home and catalog views.
/// Owned by the state bag and passed through to views unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub query: String,
    pub category: String,
    pub price_range: String,
    pub sort_by: String,
    pub country: String,
    pub location: String,
    pub age: String,
    pub height: String,
    pub body_type: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: "all".into(),
            price_range: "all".into(),
            sort_by: "rating".into(),
            country: "all".into(),
            location: "all".into(),
            age: "all".into(),
            height: "all".into(),
            body_type: "all".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterField {
    Query,
    Category,
    PriceRange,
    SortBy,
    Country,
    Location,
    Age,
    Height,
    BodyType,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::Query,
        FilterField::Category,
        FilterField::PriceRange,
        FilterField::SortBy,
        FilterField::Country,
        FilterField::Location,
        FilterField::Age,
        FilterField::Height,
        FilterField::BodyType,
    ];
}

impl SearchFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.query,
            FilterField::Category => &self.category,
            FilterField::PriceRange => &self.price_range,
            FilterField::SortBy => &self.sort_by,
            FilterField::Country => &self.country,
            FilterField::Location => &self.location,
            FilterField::Age => &self.age,
            FilterField::Height => &self.height,
            FilterField::BodyType => &self.body_type,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::Query => &mut self.query,
            FilterField::Category => &mut self.category,
            FilterField::PriceRange => &mut self.price_range,
            FilterField::SortBy => &mut self.sort_by,
            FilterField::Country => &mut self.country,
            FilterField::Location => &mut self.location,
            FilterField::Age => &mut self.age,
            FilterField::Height => &mut self.height,
            FilterField::BodyType => &mut self.body_type,
        };
        *slot = value;
    }

    /// Number of criteria narrowed away from their defaults
    pub fn active_count(&self) -> usize {
        let defaults = SearchFilters::default();
        [
            self.query != defaults.query,
            self.category != defaults.category,
            self.price_range != defaults.price_range,
            self.sort_by != defaults.sort_by,
            self.country != defaults.country,
            self.location != defaults.location,
            self.age != defaults.age,
            self.height != defaults.height,
            self.body_type != defaults.body_type,
        ]
        .iter()
        .filter(|changed| **changed)
        .count()
    }
}
