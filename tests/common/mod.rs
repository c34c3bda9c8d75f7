//! Common test utilities for budgetsheet integration tests

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The purchases used throughout the integration tests
pub const SCENARIO: &[(&str, &str)] = &[("Boots", "180"), ("Coat", "220"), ("Shirt", "25")];

/// A Monday; its week runs from Sunday 2026-10-18 to Saturday 2026-10-24
#[allow(dead_code)]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// How a price list separates its tokens
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Layout {
    Comma,
    Newline,
}

/// Builder for price list files
pub struct PriceListBuilder {
    items: Vec<(String, String)>,
    layout: Layout,
    trailer: Option<String>,
}

#[allow(dead_code)]
impl PriceListBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            layout: Layout::Newline,
            trailer: None,
        }
    }

    /// Start from [`SCENARIO`]
    pub fn scenario() -> Self {
        SCENARIO
            .iter()
            .fold(Self::new(), |builder, (item, price)| builder.item(item, price))
    }

    pub fn item(mut self, item: &str, price: &str) -> Self {
        self.items.push((item.to_string(), price.to_string()));
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Add an unpaired token at the end
    pub fn trailer(mut self, token: &str) -> Self {
        self.trailer = Some(token.to_string());
        self
    }

    pub fn content(&self) -> String {
        let tokens: Vec<&str> = self
            .items
            .iter()
            .flat_map(|(item, price)| [item.as_str(), price.as_str()])
            .chain(self.trailer.as_deref())
            .collect();
        match self.layout {
            Layout::Comma => tokens.join(", "),
            Layout::Newline => format!("{}\n", tokens.join("\n")),
        }
    }

    /// Write the list to `prices.txt` inside `dir`
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("prices.txt");
        std::fs::write(&path, self.content()).unwrap();
        path
    }
}

/// A temporary directory holding a price list and a save directory
pub struct TestWorkspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub save_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new(prices: &PriceListBuilder) -> Self {
        let dir = TempDir::new().unwrap();
        let input = prices.write_to(dir.path());
        let save_dir = dir.path().join("Budget");
        Self {
            dir,
            input,
            save_dir,
        }
    }
}
