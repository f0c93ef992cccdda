use crate::{config::OutputFormat, domain::article::ArticleType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "articlecli")]
#[command(about = "Manage an article catalog from the command line")]
#[command(version)]
pub struct Cli {
    /// JSON snapshot the store is loaded from and saved back to
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new book or DVD
    Add {
        #[command(subcommand)]
        article: AddArticle,
    },

    /// Show a single article
    Show {
        /// Article identifier
        #[arg(required_unless_present = "slug", conflicts_with = "slug")]
        id: Option<String>,

        /// Look the article up by slug instead of id
        #[arg(long)]
        slug: Option<String>,
    },

    /// List articles in insertion order
    #[command(alias = "ls")]
    List {
        /// Only articles whose id, title, publisher or metadata values contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Show at most this many articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Change the catalog fields or metadata of an article
    Update {
        /// Article identifier
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New publisher
        #[arg(long)]
        publisher: Option<String>,

        /// New release year
        #[arg(long, value_name = "YEAR")]
        year: Option<i32>,

        /// New base price
        #[arg(long, value_name = "PRICE")]
        price: Option<String>,

        /// Metadata field to set, may be repeated
        #[arg(short = 'm', long = "meta", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        meta: Vec<(String, String)>,

        /// Metadata key to remove, may be repeated
        #[arg(long = "unset", value_name = "KEY")]
        unset: Vec<String>,
    },

    /// Remove an article
    #[command(alias = "rm", alias = "delete")]
    Remove {
        /// Article identifier
        id: String,
    },

    /// Count articles, optionally of one type only
    Count {
        #[arg(value_enum, value_name = "TYPE")]
        article_type: Option<ArticleTypeArg>,
    },

    /// Print the mean discounted price of all articles
    #[command(name = "meanprice", alias = "mean-price")]
    MeanPrice,

    /// Print the ids of the articles with the earliest release year
    Oldest,
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Show { .. } => "show",
            Self::List { .. } => "list",
            Self::Update { .. } => "update",
            Self::Remove { .. } => "remove",
            Self::Count { .. } => "count",
            Self::MeanPrice => "meanprice",
            Self::Oldest => "oldest",
        }
    }
}

/// Fields shared by every article type, in command-line order.
#[derive(Args, Debug)]
pub struct CatalogFields {
    /// Unique article identifier
    pub id: String,

    /// Article title
    pub title: String,

    /// Publisher name
    pub publisher: String,

    /// Release year, not later than the current year
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Base price before discounts, rounded half up to cents
    #[arg(value_name = "PRICE")]
    pub price: String,

    /// Metadata field, may be repeated
    #[arg(short = 'm', long = "meta", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub meta: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum AddArticle {
    /// Add a book
    Book {
        #[command(flatten)]
        fields: CatalogFields,

        /// Page count
        pages: u32,
    },

    /// Add a DVD
    Dvd {
        #[command(flatten)]
        fields: CatalogFields,

        /// Running time in minutes
        #[arg(value_name = "MINUTES")]
        length: u32,

        /// Minimum age: 0, 6, 12, 16 or 18
        #[arg(value_name = "MIN_AGE")]
        age_rating: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArticleTypeArg {
    Book,
    Dvd,
}

impl From<ArticleTypeArg> for ArticleType {
    fn from(value: ArticleTypeArg) -> Self {
        match value {
            ArticleTypeArg::Book => Self::Book,
            ArticleTypeArg::Dvd => Self::Dvd,
        }
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
