use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A product as returned by the inventory service, with the quantity held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: ProductId,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Ordered, id-unique list of products. Every mutator returns a new cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Amount held for `id`, zero when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map(|p| p.amount).unwrap_or(0)
    }

    /// Returns a copy with the entry for `id` set to `amount`, or `None` if `id` is absent.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Option<Cart> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let mut products = self.products.clone();
        products[index].amount = amount;
        Some(Cart { products })
    }

    /// Appends `product`, replacing any entry already holding its id in place.
    pub fn with_product(&self, product: Product) -> Cart {
        let mut products = self.products.clone();
        match products.iter().position(|p| p.id == product.id) {
            Some(index) => products[index] = product,
            None => products.push(product),
        }
        Cart { products }
    }

    pub fn without(&self, id: ProductId) -> Cart {
        Cart {
            products: self
                .products
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Checks the structural invariants: unique ids and every amount at least one.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(format!("duplicate product id {}", product.id));
            }
            if product.amount == 0 {
                return Err(format!("product {} has amount 0", product.id));
            }
        }
        Ok(())
    }
}

impl From<Vec<Product>> for Cart {
    fn from(products: Vec<Product>) -> Self {
        Cart { products }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, amount: u32) -> Product {
        Product {
            id,
            title: format!("Tênis {}", id),
            price: 139.9,
            image: String::new(),
            amount,
        }
    }

    #[test]
    fn test_with_amount_leaves_original_untouched() {
        let cart = Cart::from(vec![product(1, 1), product(2, 3)]);
        let updated = cart.with_amount(2, 5).unwrap();

        assert_eq!(cart.amount_of(2), 3);
        assert_eq!(updated.amount_of(2), 5);
        assert_eq!(updated.products()[0].id, 1);
        assert!(cart.with_amount(9, 1).is_none());
    }

    #[test]
    fn test_with_product_keeps_ids_unique() {
        let cart = Cart::from(vec![product(1, 1)]);
        let cart = cart.with_product(product(2, 1));
        let cart = cart.with_product(product(1, 4));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.amount_of(1), 4);
        assert!(cart.check_invariants().is_ok());
    }

    #[test]
    fn test_without_preserves_order() {
        let cart = Cart::from(vec![product(1, 1), product(2, 1), product(3, 1)]);
        let ids: Vec<_> = cart.without(2).products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_check_invariants() {
        assert!(Cart::from(vec![product(1, 1), product(1, 2)])
            .check_invariants()
            .is_err());
        assert!(Cart::from(vec![product(1, 0)]).check_invariants().is_err());
        assert!(Cart::new().check_invariants().is_ok());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart = Cart::from(vec![product(1, 2)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["amount"], 2);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_inventory_product_without_amount_defaults_to_zero() {
        let json = r#"{"id": 3, "title": "Tênis Adidas", "price": 219.9, "image": "x.jpg"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.amount, 0);
        assert_eq!(p.title, "Tênis Adidas");
    }
}
