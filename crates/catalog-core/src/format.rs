//! Display Formatters

/// Stock badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockColor {
    Red,
    Orange,
    Green,
}

impl StockColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockColor::Red => "red",
            StockColor::Orange => "orange",
            StockColor::Green => "green",
        }
    }
}

/// Below this many units a product is "Low Stock"
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// US dollars, thousands separated: `$1,234.50`
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn format_stock_status(stock: u32, availability: Option<&str>) -> String {
    if stock == 0 {
        return "Out of Stock".to_string();
    }
    if stock < LOW_STOCK_THRESHOLD {
        return "Low Stock".to_string();
    }
    match availability {
        Some(status) if !status.is_empty() => status.to_string(),
        _ => "In Stock".to_string(),
    }
}

pub fn stock_status_color(stock: u32) -> StockColor {
    if stock == 0 {
        StockColor::Red
    } else if stock < LOW_STOCK_THRESHOLD {
        StockColor::Orange
    } else {
        StockColor::Green
    }
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `mens-shirts` -> `Mens Shirts`
pub fn format_category_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
