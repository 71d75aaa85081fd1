use std::str::FromStr;

use super::error::DomainError;

pub(crate) const DEFAULT_LIMIT: u32 = 10;
pub(crate) const MIN_LIMIT: u32 = 1;
pub(crate) const MAX_LIMIT: u32 = 20;

/// Feed ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortType {
    /// By distinct like count.
    #[default]
    Trend,
    /// By creation time.
    Latest,
}

impl FromStr for SortType {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "trend" => Ok(SortType::Trend),
            "latest" => Ok(SortType::Latest),
            other => Err(DomainError::Unexpected(format!("unexpected sort type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::Unexpected(format!("unexpected sort direction: {other}"))),
        }
    }
}

/// A feed page request whose values are always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeedQuery {
    pub(crate) limit: u32,
    pub(crate) offset: i64,
    pub(crate) sort_type: SortType,
    pub(crate) direction: SortDirection,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort_type: SortType::default(),
            direction: SortDirection::default(),
        }
    }
}

impl FeedQuery {
    /// Builds a query from raw request parameters. Missing, malformed or
    /// out-of-range values fall back to their defaults instead of failing.
    pub(crate) fn from_params(
        limit: Option<&str>,
        offset: Option<&str>,
        sort_type: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let limit = limit
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|value| (MIN_LIMIT..=MAX_LIMIT).contains(value))
            .unwrap_or(defaults.limit);
        let offset = offset
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|value| *value >= 0)
            .unwrap_or(defaults.offset);
        let sort_type = sort_type
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.sort_type);
        let direction = sort
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.direction);

        Self {
            limit,
            offset,
            sort_type,
            direction,
        }
    }
}
