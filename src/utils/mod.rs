pub mod financial_validation;
pub mod request_parsing;
