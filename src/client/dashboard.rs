use std::fmt;

use crate::models::country::CountryInfo;
use crate::models::exchange::ExchangeQuote;
use crate::models::news::{NewsItem, NO_DESCRIPTION};
use crate::models::user::UserProfile;
use crate::models::NOT_AVAILABLE;

/// One result card. Hiding keeps the last content around, like a CSS class toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub visible: bool,
    pub lines: Vec<String>,
}

impl Panel {
    pub fn show(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub status: String,
    pub user: Panel,
    pub country: Panel,
    pub exchange: Panel,
    pub news: Panel,
}

impl Dashboard {
    pub fn reset(&mut self) {
        self.status.clear();
        self.user.hide();
        self.country.hide();
        self.exchange.hide();
        self.news.hide();
    }

    pub fn visible_panels(&self) -> impl Iterator<Item = &Panel> {
        [&self.user, &self.country, &self.exchange, &self.news]
            .into_iter()
            .filter(|p| p.visible)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.status.is_empty() {
            writeln!(f, "{}", self.status)?;
            writeln!(f)?;
        }
        for panel in self.visible_panels() {
            for line in &panel.lines {
                writeln!(f, "{line}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_user(u: &UserProfile) -> Vec<String> {
    vec![
        "User Info".into(),
        format!("Picture: {}", u.picture),
        format!("First name: {}", u.first_name),
        format!("Last name: {}", u.last_name),
        format!("Gender: {}", u.gender),
        format!("Age: {}", u.age),
        format!("Date of birth: {}", u.date_of_birth),
        format!("City: {}", u.city),
        format!("Country: {}", u.country),
        format!("Full address: {}", u.full_address),
    ]
}

pub fn render_country(c: &CountryInfo) -> Vec<String> {
    let mut lines = vec!["Country Info".to_string()];
    if !c.flag.is_empty() && c.flag != NOT_AVAILABLE {
        lines.push(format!("Flag: {}", c.flag));
    }
    lines.push(format!("Country name: {}", c.country_name));
    lines.push(format!("Capital city: {}", c.capital));
    lines.push(format!("Official language(s): {}", c.languages.join(", ")));
    lines.push(format!("Currency: {}", c.currency.join(", ")));
    lines
}

pub fn render_currency_unavailable() -> Vec<String> {
    vec!["Exchange Rates".into(), "Currency not available.".into()]
}

fn rate_text(rate: Option<f64>) -> String {
    rate.map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string())
}

pub fn render_exchange(q: &ExchangeQuote) -> Vec<String> {
    let mut lines = vec![
        "Exchange Rates".to_string(),
        format!(
            "1 {base} = {} USD, 1 {base} = {} KZT",
            rate_text(q.usd),
            rate_text(q.kzt),
            base = q.base
        ),
    ];
    if q.last_updated != NOT_AVAILABLE {
        lines.push(format!("Updated: {}", q.last_updated));
    }
    lines
}

pub fn render_news(items: &[NewsItem]) -> Vec<String> {
    let mut lines = vec!["News".to_string()];
    if items.is_empty() {
        lines.push("No news found for this country.".into());
        return lines;
    }
    for n in items {
        if let Some(image) = &n.image {
            lines.push(format!("  Image: {image}"));
        }
        lines.push(format!("  {}", n.title.as_deref().unwrap_or("No title")));
        let description = if n.description.is_empty() { NO_DESCRIPTION } else { &n.description };
        lines.push(format!("  {description}"));
        if let Some(url) = &n.url {
            lines.push(format!("  Read full article: {url}"));
        }
    }
    lines
}
