pub(crate) mod polynomial;
pub use polynomial::Polynomial;
