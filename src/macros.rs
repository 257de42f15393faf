// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg: String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Lazily compiled pattern. Patterns are literals, so a bad one is a bug
/// caught by the first test that touches it.
#[macro_export]
macro_rules! regex {
    ($name:ident = $pat:expr) => {
        static $name: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| ::regex::Regex::new($pat).unwrap());
    };
}

/// Same idea for CSS selectors.
#[macro_export]
macro_rules! selector {
    ($name:ident = $sel:expr) => {
        static $name: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| ::scraper::Selector::parse($sel).unwrap());
    };
}
