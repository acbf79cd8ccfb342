//! Storefront highlights

use rand::{Rng, seq::SliceRandom};

use crate::products::Product;

/// Category left out of the home page's featured products.
pub const EXCLUDED_CATEGORY: &str = "groceries";

/// Products eligible for the home page.
pub fn featured_products(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.category != EXCLUDED_CATEGORY)
        .collect()
}

/// Pick one featured product at random.
pub fn pick_highlight<'a, R: Rng + ?Sized>(
    products: &'a [Product],
    rng: &mut R,
) -> Option<&'a Product> {
    featured_products(products).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::products::ProductId;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            category: category.to_string(),
            ..Product::default()
        }
    }

    #[test]
    fn excludes_groceries() {
        let products = [
            product(1, "beauty"),
            product(2, "groceries"),
            product(3, "laptops"),
        ];

        let ids: Vec<u64> = featured_products(&products).iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn highlight_is_featured() {
        let products = [
            product(1, "groceries"),
            product(2, "beauty"),
            product(3, "groceries"),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(
                pick_highlight(&products, &mut rng).map(|p| p.id),
                Some(ProductId(2))
            );
        }
    }

    #[test]
    fn no_highlight_without_featured_products() {
        let products = [product(1, "groceries")];
        let mut rng = StdRng::seed_from_u64(7);

        assert!(pick_highlight(&products, &mut rng).is_none());
        assert!(pick_highlight(&[], &mut rng).is_none());
    }
}
