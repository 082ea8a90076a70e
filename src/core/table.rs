use serde::Serialize;

use super::error::CalcError;

/// Tabulated breakpoints for one sub-category, as `(key, coefficient)` pairs.
pub type SeriesData<'a> = (&'a str, &'a [(f64, f64)]);

/// One category and its sub-categories.
pub type CategoryData<'a> = (&'a str, &'a [SeriesData<'a>]);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub key: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Series {
    label: String,
    points: Vec<Breakpoint>,
}

#[derive(Debug, Clone, PartialEq)]
struct Category {
    label: String,
    series: Vec<Series>,
}

/// Immutable category → sub-category → breakpoint → coefficient mapping.
///
/// Construction checks that labels are non-empty and unique, that every
/// sub-category holds at least one breakpoint, that breakpoints are finite and
/// strictly increasing, and that coefficients are finite and non-negative.
/// Categories keep the order they were declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    categories: Vec<Category>,
}

impl LookupTable {
    pub fn new(data: &[CategoryData<'_>]) -> Result<Self, CalcError> {
        let mut categories: Vec<Category> = Vec::with_capacity(data.len());

        for &(category_label, series_data) in data {
            if category_label.trim().is_empty() {
                return Err(CalcError::InvalidTable(
                    "category label must not be empty".to_string(),
                ));
            }
            if categories.iter().any(|c| c.label == category_label) {
                return Err(CalcError::InvalidTable(format!(
                    "duplicate category '{category_label}'"
                )));
            }

            let mut series: Vec<Series> = Vec::with_capacity(series_data.len());
            for &(series_label, points) in series_data {
                if series_label.trim().is_empty() {
                    return Err(CalcError::InvalidTable(format!(
                        "empty sub-category label under '{category_label}'"
                    )));
                }
                if series.iter().any(|s| s.label == series_label) {
                    return Err(CalcError::InvalidTable(format!(
                        "duplicate sub-category '{series_label}' under '{category_label}'"
                    )));
                }
                validate_points(category_label, series_label, points)?;
                series.push(Series {
                    label: series_label.to_string(),
                    points: points
                        .iter()
                        .map(|&(key, value)| Breakpoint { key, value })
                        .collect(),
                });
            }

            categories.push(Category {
                label: category_label.to_string(),
                series,
            });
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|c| c.label.as_str())
    }

    pub fn sub_categories(&self, category: &str) -> Result<Vec<&str>, CalcError> {
        Ok(self
            .category(category)?
            .series
            .iter()
            .map(|s| s.label.as_str())
            .collect())
    }

    /// Breakpoints of one sub-category in ascending key order.
    pub fn breakpoints(&self, category: &str, sub_category: &str) -> Result<&[Breakpoint], CalcError> {
        let category = self.category(category)?;
        let series = if sub_category.trim().is_empty() {
            None
        } else {
            category.series.iter().find(|s| s.label == sub_category)
        };
        series
            .map(|s| s.points.as_slice())
            .ok_or_else(|| CalcError::incomplete(format!("sub-category '{sub_category}'")))
    }

    /// Exact-match lookup; there is no interpolation between breakpoints.
    pub fn lookup(&self, category: &str, sub_category: &str, breakpoint: f64) -> Result<f64, CalcError> {
        self.breakpoints(category, sub_category)?
            .iter()
            .find(|p| p.key == breakpoint)
            .map(|p| p.value)
            .ok_or_else(|| CalcError::incomplete(format!("breakpoint {breakpoint}")))
    }

    fn category(&self, label: &str) -> Result<&Category, CalcError> {
        if label.trim().is_empty() {
            return Err(CalcError::incomplete("category ''"));
        }
        self.categories
            .iter()
            .find(|c| c.label == label)
            .ok_or_else(|| CalcError::incomplete(format!("category '{label}'")))
    }
}

fn validate_points(category: &str, sub_category: &str, points: &[(f64, f64)]) -> Result<(), CalcError> {
    if points.is_empty() {
        return Err(CalcError::InvalidTable(format!(
            "'{category}' / '{sub_category}' has no breakpoints"
        )));
    }

    let mut previous: Option<f64> = None;
    for &(key, value) in points {
        if !key.is_finite() {
            return Err(CalcError::InvalidTable(format!(
                "'{category}' / '{sub_category}' has a non-finite breakpoint"
            )));
        }
        if let Some(prev) = previous {
            if key <= prev {
                return Err(CalcError::InvalidTable(format!(
                    "'{category}' / '{sub_category}' breakpoints must be strictly increasing ({prev} then {key})"
                )));
            }
        }
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::InvalidTable(format!(
                "'{category}' / '{sub_category}' has invalid coefficient {value} at {key}"
            )));
        }
        previous = Some(key);
    }
    Ok(())
}

pub fn lookup_coefficient(
    table: &LookupTable,
    category: &str,
    sub_category: &str,
    breakpoint: f64,
) -> Result<f64, CalcError> {
    table.lookup(category, sub_category, breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[CategoryData<'static>] = &[
        (
            "Copper",
            &[
                ("Clipped", &[(1.5, 29.0), (2.5, 18.0), (4.0, 11.0)]),
                ("Conduit", &[(1.5, 30.0)]),
            ],
        ),
        ("Aluminium", &[("Clipped", &[(16.0, 4.5)])]),
    ];

    fn sample_table() -> LookupTable {
        LookupTable::new(SAMPLE).expect("sample table is valid")
    }

    #[test]
    fn lookup_returns_exact_tabulated_values() {
        let table = sample_table();
        assert_eq!(lookup_coefficient(&table, "Copper", "Clipped", 2.5), Ok(18.0));
        assert_eq!(table.lookup("Aluminium", "Clipped", 16.0), Ok(4.5));
    }

    #[test]
    fn lookup_does_not_interpolate_between_breakpoints() {
        let table = sample_table();
        let err = table.lookup("Copper", "Clipped", 2.0).expect_err("2.0 is not tabulated");
        assert!(matches!(err, CalcError::IncompleteSelection { .. }));
    }

    #[test]
    fn missing_keys_are_incomplete_selections() {
        let table = sample_table();
        for (category, sub) in [("", "Clipped"), ("Brass", "Clipped"), ("Copper", ""), ("Copper", "Buried")] {
            let err = table.lookup(category, sub, 1.5).expect_err("missing key");
            assert!(
                matches!(err, CalcError::IncompleteSelection { .. }),
                "unexpected {err:?} for {category}/{sub}"
            );
        }
    }

    #[test]
    fn categories_keep_declaration_order() {
        let table = sample_table();
        assert_eq!(table.categories().collect::<Vec<_>>(), vec!["Copper", "Aluminium"]);
        assert_eq!(table.sub_categories("Copper").expect("known"), vec!["Clipped", "Conduit"]);
    }

    #[test]
    fn constructor_rejects_non_increasing_breakpoints() {
        let err = LookupTable::new(&[("Copper", &[("Clipped", &[(2.5, 18.0), (2.5, 17.0)])])])
            .expect_err("duplicate breakpoint");
        assert!(matches!(err, CalcError::InvalidTable(_)));

        let err = LookupTable::new(&[("Copper", &[("Clipped", &[(4.0, 11.0), (2.5, 18.0)])])])
            .expect_err("descending breakpoints");
        assert!(matches!(err, CalcError::InvalidTable(_)));
    }

    #[test]
    fn constructor_rejects_bad_coefficients_and_labels() {
        assert!(LookupTable::new(&[("Copper", &[("Clipped", &[(2.5, -1.0)])])]).is_err());
        assert!(LookupTable::new(&[("Copper", &[("Clipped", &[(2.5, f64::NAN)])])]).is_err());
        assert!(LookupTable::new(&[("Copper", &[("Clipped", &[])])]).is_err());
        assert!(LookupTable::new(&[(" ", &[("Clipped", &[(2.5, 18.0)])])]).is_err());
        assert!(
            LookupTable::new(&[
                ("Copper", &[("Clipped", &[(2.5, 18.0)])]),
                ("Copper", &[("Clipped", &[(2.5, 18.0)])]),
            ])
            .is_err()
        );
    }
}
