use std::collections::BTreeSet;

use shared::domain::Product;

pub fn product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products match.\n".to_string();
    }

    let category_width = products
        .iter()
        .map(|p| p.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("CATEGORY".len());

    let mut out = format!(
        "{:>4}  {:>9}  {:<category_width$}  TITLE\n",
        "ID", "PRICE", "CATEGORY"
    );
    for product in products {
        out.push_str(&format!(
            "{:>4}  {:>9}  {:<category_width$}  {}\n",
            product.id,
            format!("${:.2}", product.price),
            product.category,
            product.title
        ));
    }
    out
}

/// Distinct categories, sorted.
pub fn categories(products: &[Product]) -> Vec<&str> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
