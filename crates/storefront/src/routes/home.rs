//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use open_fashion_core::Product;

use crate::catalog;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
///
/// `position` is the product's index in the catalog; it travels through
/// the add-to-cart form to identify which product was chosen.
#[derive(Clone)]
pub struct ProductView {
    pub position: usize,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl ProductView {
    fn new(position: usize, product: &Product) -> Self {
        Self {
            position,
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Catalog products for the grid.
    pub products: Vec<ProductView>,
    /// Number of entries currently in the cart, for the header badge.
    pub cart_count: usize,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let products = catalog::all()
        .iter()
        .enumerate()
        .map(|(position, product)| ProductView::new(position, product))
        .collect();
    let cart_count = state.cart().load().await.len();

    HomeTemplate {
        products,
        cart_count,
    }
}

/// Menu affordance: a named extension point with no behavior yet.
#[instrument]
pub async fn menu() -> Redirect {
    tracing::debug!("menu requested, no menu implemented");
    Redirect::to("/")
}

/// Search affordance: a named extension point with no behavior yet.
#[instrument]
pub async fn search() -> Redirect {
    tracing::debug!("search requested, no search implemented");
    Redirect::to("/")
}
