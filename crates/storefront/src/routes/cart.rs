//! Cart route handlers.
//!
//! The cart page loads the persisted cart on every view; add and remove go
//! through the cart service and redirect back, so the rendered page always
//! reflects the persisted state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use open_fashion_core::{Cart, CartEntry, EntryId};

use crate::catalog;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Cart entry display data for templates.
#[derive(Clone)]
pub struct CartEntryView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&CartEntry> for CartEntryView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            price: entry.price.clone(),
            image: entry.image.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub entries: Vec<CartEntryView>,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            entries: cart.entries().iter().map(CartEntryView::from).collect(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    /// Catalog position of the product being added.
    pub position: usize,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    /// Entry id of the cart entry being removed.
    pub id: Uuid,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartShowTemplate {
    let cart = state.cart().load().await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add a catalog product to the cart, then return to the home page.
///
/// The form carries the product's catalog position; a position outside the
/// catalog is a client error.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = catalog::get(form.position).ok_or_else(|| {
        AppError::BadRequest(format!("no catalog product at position {}", form.position))
    })?;

    state.cart().add(product).await?;

    Ok(Redirect::to("/"))
}

/// Remove a cart entry by id, then return to the cart page.
///
/// An id that no longer names an entry is a no-op; the redirect re-renders
/// whatever the cart now holds.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    state.cart().remove(EntryId::from(form.id)).await?;

    Ok(Redirect::to("/cart"))
}
