use crate::{
    application::{
        dto::{ArticleCount, ArticleDto, ArticleKindDto, ArticleListing, MeanPrice, OldestArticles},
        error::{ApplicationError, ApplicationResult},
    },
    config::OutputFormat,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Display;

const LABEL_WIDTH: usize = 12;

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn to_json<T: Serialize>(value: &T) -> ApplicationResult<String> {
    let mut out = serde_json::to_string_pretty(value)
        .map_err(|err| ApplicationError::infrastructure(format!("cannot encode output: {err}")))?;
    out.push('\n');
    Ok(out)
}

fn field(label: &str, value: impl Display) -> String {
    let label = format!("{label}:");
    format!("{label:<LABEL_WIDTH$}{value}\n")
}

fn details(article: &ArticleDto) -> String {
    let mut lines = vec![
        field("id", &article.id),
        field("type", article.kind.article_type().label()),
        field("title", &article.title),
        field("slug", &article.slug),
        field("publisher", &article.publisher),
        field("year", article.release_year),
        field("base price", article.base_price),
        field("price", article.price),
    ];
    match article.kind {
        ArticleKindDto::Book { pages } => lines.push(field("pages", pages)),
        ArticleKindDto::Dvd { length, age_rating } => {
            lines.push(field("length", format!("{length} min")));
            lines.push(field("age rating", age_rating));
        }
    }
    lines.push(field("created", timestamp(&article.created_at)));
    lines.push(field("updated", timestamp(&article.updated_at)));

    if !article.metadata.is_empty() {
        lines.push("metadata:\n".to_string());
        lines.extend(
            article
                .metadata
                .iter()
                .map(|(key, value)| format!("  {key} = {value}\n")),
        );
    }
    lines.concat()
}

/// `headline` is only printed in text mode.
pub fn article(
    headline: Option<&str>,
    article: &ArticleDto,
    format: OutputFormat,
) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(article),
        OutputFormat::Text => Ok(headline
            .map(|headline| format!("{headline}\n"))
            .unwrap_or_default()
            + &details(article)),
    }
}

pub fn listing(listing: &ArticleListing, format: OutputFormat) -> ApplicationResult<String> {
    if format == OutputFormat::Json {
        return to_json(listing);
    }
    if listing.items.is_empty() {
        return Ok("No articles.\n".to_string());
    }

    let prices: Vec<String> = listing.items.iter().map(|a| a.price.to_string()).collect();
    let id_width = listing
        .items
        .iter()
        .map(|a| a.id.chars().count())
        .chain(["ID".len()])
        .max()
        .unwrap_or_default();
    let price_width = prices
        .iter()
        .map(String::len)
        .chain(["PRICE".len()])
        .max()
        .unwrap_or_default();

    let header = format!("{:<id_width$}  {:<4}  {:>price_width$}  TITLE\n", "ID", "TYPE", "PRICE");
    let rows = listing.items.iter().zip(&prices).map(|(item, price)| {
        format!(
            "{:<id_width$}  {:<4}  {price:>price_width$}  {}\n",
            item.id,
            item.kind.article_type().label(),
            item.title
        )
    });
    let footer = listing
        .truncated
        .then(|| format!("({} of {} shown)\n", listing.items.len(), listing.total));

    Ok(std::iter::once(header).chain(rows).chain(footer).collect())
}

pub fn removed(article: &ArticleDto, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(article),
        OutputFormat::Text => Ok(format!("Removed article {} ({}).\n", article.id, article.title)),
    }
}

pub fn count(count: &ArticleCount, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(count),
        OutputFormat::Text => Ok(format!("{}\n", count.count)),
    }
}

pub fn mean_price(mean: &MeanPrice, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(mean),
        OutputFormat::Text => Ok(format!("{}\n", mean.mean_price)),
    }
}

pub fn oldest(oldest: &OldestArticles, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(oldest),
        OutputFormat::Text => Ok(oldest.ids.iter().map(|id| format!("Id: {id}\n")).collect()),
    }
}
