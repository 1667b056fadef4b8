// ============================================================================
// Product Domain Commands
// ============================================================================

#[derive(Debug, Clone)]
pub enum ProductCommand {
    CreateProduct {
        product_id: String,
        name: String,
        price: f64,
    },
    ChangePrice {
        product_id: String,
        price: f64,
    },
}
