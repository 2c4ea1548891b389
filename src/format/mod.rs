//! Output formatting for listings and evaluations (table, JSON, markdown, CSV).

use crate::amazon::ProductRecord;
use crate::arbitrage::EvaluationResult;
use crate::config::OutputFormat;

/// Formats command output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of listings.
    pub fn format_products(&self, products: &[ProductRecord]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats an arbitrage evaluation.
    ///
    /// JSON keeps the wire shape (`ok`, `profitMargin`, `amazonPrice`, `product`);
    /// the other formats render a short summary.
    pub fn format_evaluation(&self, product_name: &str, result: &EvaluationResult) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => self.csv_evaluation(product_name, result),
            OutputFormat::Table | OutputFormat::Markdown => self.table_evaluation(product_name, result),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[ProductRecord]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[ProductRecord]) -> String {
        let price_width = 10;
        let rating_width = 6;
        let brand_width = 20;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<price_width$}  {:<rating_width$}  {:<brand_width$}  {}",
            "Price", "Rating", "Brand", "Title"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<rating_width$}  {:-<brand_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        for product in products {
            let rating = product
                .stars()
                .map(|s| format!("{:.1}", s))
                .unwrap_or_else(|| "N/A".to_string());

            lines.push(format!(
                "{:>price_width$}  {:>rating_width$}  {:<brand_width$}  {}",
                product.price,
                rating,
                truncate(&product.brand_name, brand_width),
                truncate(&product.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    fn table_evaluation(&self, product_name: &str, result: &EvaluationResult) -> String {
        let mut lines = vec![format!("Product:  {}", product_name)];

        if !result.ok {
            lines.push("Verdict:  Not worth reselling".to_string());
            return lines.join("\n");
        }

        lines.push("Verdict:  Good to resell".to_string());
        if let Some(price) = result.amazon_price {
            lines.push(format!("Amazon:   {:.2}", price));
        }
        if let Some(margin) = result.profit_margin {
            lines.push(format!("Margin:   {:.2}%", margin));
        }
        if let Some(product) = &result.product {
            lines.push(format!("Listing:  {}", product.title));
            lines.push(format!("URL:      {}", product.product_url));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[ProductRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Rating | Brand | Title |".to_string());
        lines.push("|-------|--------|-------|-------|".to_string());

        for product in products {
            let rating = product.stars().map(|s| format!("{:.1}", s)).unwrap_or_default();

            lines.push(format!(
                "| {} | {} | {} | [{}]({}) |",
                product.price,
                rating,
                product.brand_name,
                truncate(&product.title, 40),
                product.product_url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "title,price,rating,brand,url".to_string()
    }

    fn csv_products(&self, products: &[ProductRecord]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(&product.title),
                Self::csv_escape(&product.price),
                Self::csv_escape(&product.rating),
                Self::csv_escape(&product.brand_name),
                product.product_url
            ));
        }

        lines.join("\n")
    }

    fn csv_evaluation(&self, product_name: &str, result: &EvaluationResult) -> String {
        let opt = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_default();
        let url = result.product.as_ref().map(|p| p.product_url.as_str()).unwrap_or_default();

        format!(
            "product,ok,amazon_price,profit_margin,url\n{},{},{},{},{}",
            Self::csv_escape(product_name),
            result.ok,
            opt(result.amazon_price),
            opt(result.profit_margin),
            url
        )
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens to `width` characters, ending in "..." when cut.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
