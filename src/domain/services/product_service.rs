use crate::domain::product::{Product, ProductError};

pub struct ProductService;

impl ProductService {
    /// Raise every price by `percentage` percent.
    ///
    /// All new prices are validated before any product is changed, so on
    /// error the slice is left as it was.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
        if !percentage.is_finite() || percentage < -100.0 {
            return Err(ProductError::InvalidPercentage(percentage));
        }

        let factor = 1.0 + percentage / 100.0;
        let mut repriced = products.to_vec();
        for product in repriced.iter_mut() {
            product.change_price(product.price() * factor)?;
        }

        products.clone_from_slice(&repriced);
        Ok(())
    }
}
