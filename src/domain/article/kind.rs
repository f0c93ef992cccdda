// src/domain/article/kind.rs
use crate::domain::article::value_objects::{
    AgeRating, BasePrice, PageCount, PlayingTime, round_price,
};
use rust_decimal::Decimal;
use std::fmt;

const BOOK_DISCOUNT_PER_YEAR: u32 = 5;
const BOOK_AGE_DISCOUNT_CAP: u32 = 30;
const THICK_BOOK_PAGES: u32 = 1000;
const THICK_BOOK_DISCOUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleType {
    Book,
    Dvd,
}

impl ArticleType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Dvd => "dvd",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Dvd => "DVD",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific attributes. The kind of an article is fixed when it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleKind {
    Book {
        pages: PageCount,
    },
    Dvd {
        length: PlayingTime,
        age_rating: AgeRating,
    },
}

impl ArticleKind {
    pub const fn article_type(&self) -> ArticleType {
        match self {
            Self::Book { .. } => ArticleType::Book,
            Self::Dvd { .. } => ArticleType::Dvd,
        }
    }

    /// Whole-number discount for an article that is `age` years old.
    ///
    /// Books lose 5% per year, at most 30%, and another 3% above 1000 pages.
    /// DVDs are discounted by age rating only.
    pub fn discount_percent(&self, age: u32) -> u32 {
        match self {
            Self::Book { pages } => {
                let by_age = age
                    .saturating_mul(BOOK_DISCOUNT_PER_YEAR)
                    .min(BOOK_AGE_DISCOUNT_CAP);
                let by_pages = if pages.value() > THICK_BOOK_PAGES {
                    THICK_BOOK_DISCOUNT
                } else {
                    0
                };
                by_age + by_pages
            }
            Self::Dvd { age_rating, .. } => match age_rating {
                AgeRating::Unrestricted => 20,
                AgeRating::SixAndUp => 15,
                AgeRating::TwelveAndUp => 10,
                AgeRating::SixteenAndUp => 5,
                AgeRating::EighteenAndUp => 0,
            },
        }
    }
}

/// `base` minus `percent` of it; the discount is rounded to cents before subtracting.
pub fn discounted_price(base: BasePrice, percent: u32) -> Decimal {
    let base = base.amount();
    let discount = round_price(base * Decimal::new(i64::from(percent), 2));
    round_price(base - discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book(pages: u32) -> ArticleKind {
        ArticleKind::Book {
            pages: PageCount::new(pages).unwrap(),
        }
    }

    fn dvd(min_age: u32) -> ArticleKind {
        ArticleKind::Dvd {
            length: PlayingTime::new(90).unwrap(),
            age_rating: AgeRating::from_min_age(min_age).unwrap(),
        }
    }

    #[test]
    fn book_discount_grows_with_age_up_to_the_cap() {
        assert_eq!(book(300).discount_percent(0), 0);
        assert_eq!(book(300).discount_percent(4), 20);
        assert_eq!(book(300).discount_percent(6), 30);
        assert_eq!(book(300).discount_percent(40), 30);
    }

    #[test]
    fn thick_books_get_an_extra_three_percent() {
        assert_eq!(book(1000).discount_percent(0), 0);
        assert_eq!(book(1001).discount_percent(0), 3);
        assert_eq!(book(1500).discount_percent(10), 33);
    }

    #[test]
    fn dvd_discount_follows_age_rating() {
        let by_rating: Vec<_> = [0, 6, 12, 16, 18]
            .into_iter()
            .map(|age| dvd(age).discount_percent(7))
            .collect();
        assert_eq!(by_rating, vec![20, 15, 10, 5, 0]);
    }

    #[test]
    fn discount_is_rounded_half_up_before_subtracting() {
        let base = BasePrice::parse("9.99").unwrap();
        // 15% of 9.99 is 1.4985, which rounds to 1.50
        assert_eq!(discounted_price(base, 15), dec!(8.49));
        assert_eq!(discounted_price(base, 0).to_string(), "9.99");
        assert_eq!(
            discounted_price(BasePrice::parse("10").unwrap(), 33).to_string(),
            "6.70"
        );
    }
}
