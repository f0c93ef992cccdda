use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const MAX_TOKEN_LEN: usize = 64;
const MAX_TITLE_LEN: usize = 200;
const MAX_PUBLISHER_LEN: usize = 200;

/// Prices are kept in cents; halves round away from zero.
pub const PRICE_SCALE: u32 = 2;

/// Rounds `amount` to [`PRICE_SCALE`] places and pads it to exactly that many.
pub fn round_price(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

fn validate_token(value: &str, what: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{what} cannot be empty")));
    }
    if value.chars().count() > MAX_TOKEN_LEN {
        return Err(DomainError::Validation(format!(
            "{what} must be at most {MAX_TOKEN_LEN} characters"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(DomainError::Validation(format!(
            "{what} contains invalid character {bad:?}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        validate_token(&value, "article id")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetadataKey(String);

impl MetadataKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        validate_token(&value, "metadata key")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form `key = value` fields attached to an article, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMetadata(BTreeMap<MetadataKey, String>);

impl ArticleMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &MetadataKey) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: MetadataKey, value: impl Into<String>) -> Option<String> {
        self.0.insert(key, value.into())
    }

    pub fn remove(&mut self, key: &MetadataKey) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MetadataKey, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MetadataKey, String)> for ArticleMetadata {
    fn from_iter<I: IntoIterator<Item = (MetadataKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher(String);

impl Publisher {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("publisher cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_PUBLISHER_LEN {
            return Err(DomainError::Validation(format!(
                "publisher must be at most {MAX_PUBLISHER_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Publisher> for String {
    fn from(value: Publisher) -> Self {
        value.0
    }
}

/// Calendar year an article was released in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    /// Rejects years that are not positive or lie after `current_year`.
    pub fn new(year: i32, current_year: i32) -> DomainResult<Self> {
        let year = Self::stored(year)?;
        if year.0 > current_year {
            return Err(DomainError::Validation(format!(
                "release year {} is in the future",
                year.0
            )));
        }
        Ok(year)
    }

    /// Accepts a year recorded earlier, when it was checked against the clock of that run.
    pub fn stored(year: i32) -> DomainResult<Self> {
        if year <= 0 {
            return Err(DomainError::Validation(format!(
                "release year must be positive, got {year}"
            )));
        }
        Ok(Self(year))
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whole years between the release and `current_year`, never negative.
    pub fn age(self, current_year: i32) -> u32 {
        u32::try_from(current_year - self.0).unwrap_or(0)
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price before discounts, non-negative with exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BasePrice(Decimal);

impl BasePrice {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::Validation(format!(
                "base price cannot be negative, got {amount}"
            )));
        }
        Ok(Self(round_price(amount)))
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let amount = Decimal::from_str(raw.trim()).map_err(|err| {
            DomainError::Validation(format!("base price `{raw}` is not a number: {err}"))
        })?;
        Self::new(amount)
    }

    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for BasePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn positive(value: u32, what: &str) -> DomainResult<u32> {
    if value == 0 {
        return Err(DomainError::Validation(format!("{what} must be positive")));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(u32);

impl PageCount {
    pub fn new(pages: u32) -> DomainResult<Self> {
        positive(pages, "page count").map(Self)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Running time of a DVD in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayingTime(u32);

impl PlayingTime {
    pub fn new(minutes: u32) -> DomainResult<Self> {
        positive(minutes, "length").map(Self)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRating {
    Unrestricted,
    SixAndUp,
    TwelveAndUp,
    SixteenAndUp,
    EighteenAndUp,
}

impl AgeRating {
    pub fn from_min_age(min_age: u32) -> DomainResult<Self> {
        match min_age {
            0 => Ok(Self::Unrestricted),
            6 => Ok(Self::SixAndUp),
            12 => Ok(Self::TwelveAndUp),
            16 => Ok(Self::SixteenAndUp),
            18 => Ok(Self::EighteenAndUp),
            other => Err(DomainError::Validation(format!(
                "age rating must be one of 0, 6, 12, 16 or 18, got {other}"
            ))),
        }
    }

    pub const fn min_age(self) -> u32 {
        match self {
            Self::Unrestricted => 0,
            Self::SixAndUp => 6,
            Self::TwelveAndUp => 12,
            Self::SixteenAndUp => 16,
            Self::EighteenAndUp => 18,
        }
    }
}
