//! The fixed product catalog.
//!
//! Products are compiled in, ordered, and never mutated; their identity on
//! the home page is their position in this list.

use std::sync::LazyLock;

use open_fashion_core::Product;

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new("/static/images/dress1.png", "Office Wear", "$120"),
        Product::new("/static/images/dress2.png", "Black Wear", "$120"),
        Product::new("/static/images/dress3.png", "Church Wear", "$120"),
        Product::new("/static/images/dress4.png", "Lamerei", "$120"),
        Product::new("/static/images/dress5.png", "Lopo", "$120"),
        Product::new("/static/images/dress6.png", "Lame", "$120"),
        Product::new("/static/images/dress7.png", "Church Dress", "$120"),
        Product::new("/static/images/dress1.png", "Dress", "$120"),
    ]
});

/// All catalog products, in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by its catalog position.
#[must_use]
pub fn get(position: usize) -> Option<&'static Product> {
    CATALOG.get(position)
}
