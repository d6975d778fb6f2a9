//! Validation utilities for the cafe stock tracker

/// Validate a movement or plan quantity (whole units, strictly positive)
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate an item's minimum-stock threshold
pub fn validate_min_stock(min_stock: i64) -> Result<(), &'static str> {
    if min_stock < 0 {
        return Err("Minimum stock cannot be negative");
    }
    Ok(())
}

/// Validate a display name (item, supplier, or account)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.len() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// Validate an item's unit label (e.g. "kg", "bag", "bottle")
pub fn validate_unit(unit: &str) -> Result<(), &'static str> {
    let trimmed = unit.trim();
    if trimmed.is_empty() {
        return Err("Unit cannot be empty");
    }
    if trimmed.len() > 20 {
        return Err("Unit must be at most 20 characters");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn min_stock_allows_zero() {
        assert!(validate_min_stock(0).is_ok());
        assert!(validate_min_stock(10).is_ok());
        assert!(validate_min_stock(-1).is_err());
    }

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert!(validate_name("Colombia beans").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn unit_labels_are_short() {
        assert!(validate_unit("kg").is_ok());
        assert!(validate_unit("").is_err());
        assert!(validate_unit(&"x".repeat(21)).is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }
}
