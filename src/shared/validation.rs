use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating seller email addresses
    /// Local part of `[A-Za-z0-9+_.-]`, a domain of `[A-Za-z0-9.-]`, and an alphabetic TLD of 2+ chars
    /// - Valid: "seller@example.com", "first.last+tag@mail.example.co"
    /// - Invalid: "seller", "seller@", "seller@test", "seller@test.", "seller@.com"
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    /// Regex for validating seller usernames
    /// At least 3 characters, each alphanumeric, underscore or hyphen
    /// - Valid: "seller", "seller_", "seller-", "0123456789"
    /// - Invalid: "se", "seller ", "seller.", "seller!", "seller@"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{3,}$").unwrap();
}
