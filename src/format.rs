//! Display formatting for prices

/// `$100` for whole amounts, `$12.50` otherwise
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}
