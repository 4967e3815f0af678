pub mod assessment;
pub mod contact;
pub mod mentor;
