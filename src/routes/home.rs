//! Home page route handler.
//!
//! The entire site is a single landing page: hero, featured inventory,
//! about, and contact sections. Inventory and about content are static
//! view data rendered through the template.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

/// Inventory item display data for the featured grid.
#[derive(Clone)]
pub struct ProductView {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_path: String,
    pub status: String,
}

/// About-section feature card.
#[derive(Clone)]
pub struct FeatureView {
    pub title: String,
    pub description: String,
}

/// Static featured inventory (can be replaced with dynamic data later).
fn get_featured_inventory() -> Vec<ProductView> {
    vec![
        ProductView {
            name: "AR-15 Complete Rifle".to_string(),
            category: "Rifles".to_string(),
            description: "Premium quality AR-15 platform with accessories and optics ready mounting system.".to_string(),
            image_path: "/static/images/products/product-1.svg".to_string(),
            status: "In Stock".to_string(),
        },
        ProductView {
            name: "Tactical Handgun".to_string(),
            category: "Handguns".to_string(),
            description: "High-performance tactical pistol with enhanced features for reliability and accuracy.".to_string(),
            image_path: "/static/images/products/product-2.svg".to_string(),
            status: "In Stock".to_string(),
        },
        ProductView {
            name: "Tactical Gear Bundle".to_string(),
            category: "Accessories".to_string(),
            description: "Complete tactical gear set including holster, magazine pouches, and belt system.".to_string(),
            image_path: "/static/images/products/product-3.svg".to_string(),
            status: "Available".to_string(),
        },
        ProductView {
            name: "Precision Optics".to_string(),
            category: "Optics".to_string(),
            description: "Premium red dot sights and scopes for enhanced accuracy and target acquisition.".to_string(),
            image_path: "/static/images/products/product-4.svg".to_string(),
            status: "In Stock".to_string(),
        },
    ]
}

/// Static about-section features.
fn get_about_features() -> Vec<FeatureView> {
    vec![
        FeatureView {
            title: "Licensed & Insured".to_string(),
            description: "Fully licensed FFL dealer operating with complete compliance and professional standards.".to_string(),
        },
        FeatureView {
            title: "Expert Guidance".to_string(),
            description: "Knowledgeable staff ready to help you find the perfect firearm for your needs.".to_string(),
        },
        FeatureView {
            title: "Quality Products".to_string(),
            description: "Curated selection of premium firearms and tactical gear from trusted manufacturers.".to_string(),
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured inventory items for the grid.
    pub products: Vec<ProductView>,
    /// About-section feature cards.
    pub features: Vec<FeatureView>,
}

/// Display the home page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        products: get_featured_inventory(),
        features: get_about_features(),
    }
}
